//! # 页面图像引用
//!
//! 页面文件命名约定为 `page-NN.png`，NN 为至少两位、零填充的页码。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 使用
//! - 使用 `regex` 识别页面文件名

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// 输入目录中的一张页面图像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// 页码
    pub page: u32,
    /// 文件名（输出沿用同名）
    pub file_name: String,
    /// 输入路径
    pub path: PathBuf,
}

/// 由页码生成文件名
pub fn page_file_name(page: u32) -> String {
    format!("page-{:02}.png", page)
}

/// 从文件名解析页码，不符合命名约定时返回 `None`
pub fn parse_page_number(file_name: &str) -> Option<u32> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"^page-(\d{2,})\.png$").unwrap());

    pattern
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
}
