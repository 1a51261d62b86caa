//! # 数据模型模块
//!
//! 定义裁剪矩形、页面引用、单页处理结果和运行汇总。
//!
//! ## 依赖关系
//! - 被 `batch/`、`imaging/`、`report/` 和 `commands/` 使用
//! - 子模块: rect, page, outcome

pub mod outcome;
pub mod page;
pub mod rect;

pub use outcome::{to_megabytes, CropOutcome, CropStats, RunSummary};
pub use page::{page_file_name, parse_page_number, PageImage};
pub use rect::CropRect;
