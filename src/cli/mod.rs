//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。工具只有一个动作（裁剪），
//! 参数直接平铺在顶层，不设子命令。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: crop

pub mod crop;

use clap::Parser;

/// pagecrop - 批量裁剪扫描页面
#[derive(Parser, Debug)]
#[command(name = "pagecrop")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Crop book pages to remove excess white space and improve extraction quality",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub crop: crop::CropArgs,
}
