//! # 统一错误处理模块
//!
//! 定义 pagecrop 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单页错误（解码、编码、写出）在批处理中被捕获并记录；
//! 目录级错误向上传播，由 `main.rs` 以非零状态退出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pagecrop 统一错误类型
#[derive(Error, Debug)]
pub enum CropError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 图像错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode image {path}: {source}")]
    DecodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    EncodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CropError>;
