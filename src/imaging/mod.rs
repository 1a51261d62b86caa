//! # 图像处理模块
//!
//! 单页图像的解码、裁剪与 PNG 编码。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 调用
//! - 使用 `image` crate
//! - 子模块: crop

pub mod crop;

pub use crop::{crop_page, write_png};
