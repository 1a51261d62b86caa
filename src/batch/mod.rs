//! # 批量处理模块
//!
//! 提供页面收集与顺序批处理能力。
//!
//! ## 功能
//! - 按命名约定或指定页码收集页面
//! - 顺序处理（不并行）
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 使用
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{PageCollector, PageSelection};
pub use runner::{BatchResult, BatchRunner};
