//! # pagecrop - 扫描页面批量裁剪工具
//!
//! 对目录中的 `page-NN.png` 页面应用统一的裁剪矩形，去除多余页边距、
//! 减小文件体积，便于后续文字提取。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (页面收集与顺序批处理)
//!   │     ├── imaging/  (解码、裁剪、PNG 编码)
//!   │     ├── report/   (CSV 报告)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod imaging;
mod models;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Windows 控制台需要开启 ANSI 转义才能显示颜色
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 单页失败不影响退出码；只有目录级错误以 1 退出
    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
