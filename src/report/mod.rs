//! # 报告导出模块
//!
//! 将每页处理结果导出为 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 调用
//! - 子模块: csv_report

pub mod csv_report;

pub use csv_report::write_csv;
