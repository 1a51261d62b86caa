//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! - `[ERR]` 写到 stderr：目录级错误由 `main.rs` 打印，单页失败由
//!   `batch/runner.rs` 在进度条暂停时打印
//! - `[WARN]` 用于缺失的指定页面和空工作集
//! - `print_header` / `print_field` / `print_separator` 组成裁剪汇总
//!
//! ## 依赖关系
//! - 被 `main.rs`、`batch/runner.rs`、`commands/crop.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印汇总中的一行，标签左对齐到 24 列
pub fn print_field(label: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", label).dimmed(), value);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
