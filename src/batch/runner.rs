//! # 批量执行器
//!
//! 顺序处理页面列表：一页完成解码、裁剪、写出后才开始下一页。
//!
//! ## 功能
//! - 进度条显示（每页一步）
//! - 单页失败不中断，错误打印在进度条上方
//! - 汇总统计
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印单页错误

use crate::error::Result;
use crate::models::{CropOutcome, CropStats, PageImage, RunSummary};
use crate::utils::{output, progress};

/// 批量处理结果
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 每页结果（按处理顺序）
    pub outcomes: Vec<CropOutcome>,
}

impl BatchResult {
    /// 合并单页结果
    pub fn merge(&mut self, outcome: CropOutcome) {
        self.outcomes.push(outcome);
    }

    /// 汇总统计（只计成功页面）
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_outcomes(&self.outcomes)
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 进度条消息
    message: String,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理页面列表
    pub fn run<F>(&self, pages: &[PageImage], mut processor: F) -> BatchResult
    where
        F: FnMut(&PageImage) -> Result<CropStats>,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(pages.len() as u64, &self.message)
        } else {
            progress::create_hidden_bar()
        };

        let mut result = BatchResult::default();

        for page in pages {
            let outcome = match processor(page) {
                Ok(stats) => CropOutcome::Cropped {
                    file_name: page.file_name.clone(),
                    page: page.page,
                    stats,
                },
                Err(e) => {
                    pb.suspend(|| {
                        output::print_error(&format!(
                            "Error processing {}: {}",
                            page.file_name, e
                        ));
                    });
                    CropOutcome::Failed {
                        file_name: page.file_name.clone(),
                        page: page.page,
                        error: e.to_string(),
                    }
                }
            };

            result.merge(outcome);
            pb.inc(1);
        }

        pb.finish_and_clear();

        result
    }
}
