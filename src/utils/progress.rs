//! # 进度条工具
//!
//! 封装 `indicatif`。裁剪时每处理一页前进一步；
//! `BatchRunner::show_progress(false)` 时改用隐藏进度条，
//! `suspend` 和 `inc` 调用保持不变。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 创建页面进度条，`message` 显示在计数之后
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// 创建不绘制的进度条
pub fn create_hidden_bar() -> ProgressBar {
    ProgressBar::hidden()
}
