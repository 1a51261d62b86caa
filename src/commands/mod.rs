//! # 命令执行模块
//!
//! 实现裁剪命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `imaging/`, `models/`, `utils/`
//! - 子模块: crop

pub mod crop;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    crop::execute(cli.crop)
}
