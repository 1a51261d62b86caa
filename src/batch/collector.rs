//! # 页面收集器
//!
//! 根据输入目录和页码选择确定本次要处理的页面列表。
//!
//! ## 功能
//! - 指定页码：按给定顺序解析为 `page-NN.png`，缺失的页码单独记录
//! - 全部页面：扫描输入目录（不递归），按文件名字典序排序
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 调用
//! - 使用 `models/page.rs` 的命名约定
//! - 使用 `walkdir` 遍历目录

use crate::error::{CropError, Result};
use crate::models::{page_file_name, parse_page_number, PageImage};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 页码选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    /// 输入目录中全部符合命名约定的页面
    All,
    /// 仅处理指定页码
    Explicit(Vec<u32>),
}

/// 收集结果
#[derive(Debug, Default)]
pub struct CollectedPages {
    /// 待处理页面（已排序或保持指定顺序）
    pub pages: Vec<PageImage>,
    /// 指定但不存在的页面文件名
    pub missing: Vec<String>,
}

/// 页面收集器
pub struct PageCollector {
    /// 输入目录
    input: PathBuf,
    /// 页码选择
    selection: PageSelection,
}

impl PageCollector {
    /// 创建新的页面收集器
    pub fn new(input: PathBuf, selection: PageSelection) -> Self {
        Self { input, selection }
    }

    /// 收集所有待处理页面
    pub fn collect(&self) -> Result<CollectedPages> {
        if !self.input.is_dir() {
            return Err(CropError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        match &self.selection {
            PageSelection::All => self.collect_all(),
            PageSelection::Explicit(pages) => Ok(self.collect_explicit(pages)),
        }
    }

    /// 按指定页码收集
    fn collect_explicit(&self, pages: &[u32]) -> CollectedPages {
        let mut collected = CollectedPages::default();

        for &page in pages {
            let file_name = page_file_name(page);
            let path = self.input.join(&file_name);
            if path.is_file() {
                collected.pages.push(PageImage {
                    page,
                    file_name,
                    path,
                });
            } else {
                collected.missing.push(file_name);
            }
        }

        collected
    }

    /// 扫描目录收集全部页面
    fn collect_all(&self) -> Result<CollectedPages> {
        let mut pages = Vec::new();

        for entry in WalkDir::new(&self.input).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| CropError::FileReadError {
                path: self.input.display().to_string(),
                source: e.into(),
            })?;

            // 指向图像的符号链接也算页面
            if !entry.path().is_file() {
                continue;
            }

            let file_name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => continue,
            };

            if let Some(page) = parse_page_number(&file_name) {
                pages.push(PageImage {
                    page,
                    file_name,
                    path: entry.into_path(),
                });
            }
        }

        pages.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Ok(CollectedPages {
            pages,
            missing: Vec::new(),
        })
    }
}
