//! # 裁剪参数 CLI 定义
//!
//! 输入/输出目录、裁剪边界和测试页选择。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/crop.rs`

use crate::batch::PageSelection;
use crate::error::Result;
use crate::models::CropRect;

use clap::Args;
use std::path::PathBuf;

/// `--test` 模式处理的页码
pub const TEST_PAGES: [u32; 3] = [1, 10, 50];

/// 裁剪参数
#[derive(Args, Debug)]
pub struct CropArgs {
    /// Input directory with original images
    #[arg(short, long, default_value = "data/source/black_book")]
    pub input: PathBuf,

    /// Output directory for cropped images
    #[arg(short, long, default_value = "data/source/black_book_cropped")]
    pub output: PathBuf,

    /// Left boundary for crop
    #[arg(long, default_value_t = 800, allow_negative_numbers = true)]
    pub left: i32,

    /// Top boundary for crop
    #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
    pub top: i32,

    /// Right boundary for crop
    #[arg(long, default_value_t = 3200, allow_negative_numbers = true)]
    pub right: i32,

    /// Bottom boundary for crop
    #[arg(long, default_value_t = 2500, allow_negative_numbers = true)]
    pub bottom: i32,

    /// Test mode: only process pages 1, 10, and 50
    #[arg(long, default_value_t = false)]
    pub test: bool,

    /// Specific page numbers to test
    #[arg(long, num_args = 1.., value_name = "PAGE")]
    pub test_pages: Vec<u32>,

    /// Write a per-page CSV report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print a per-page table after the summary
    #[arg(long, default_value_t = false)]
    pub details: bool,
}

impl CropArgs {
    /// 校验并构建裁剪矩形
    pub fn rect(&self) -> Result<CropRect> {
        CropRect::new(self.left, self.top, self.right, self.bottom)
    }

    /// 页码选择，`--test` 优先于 `--test-pages`
    pub fn selection(&self) -> PageSelection {
        if self.test {
            PageSelection::Explicit(TEST_PAGES.to_vec())
        } else if !self.test_pages.is_empty() {
            PageSelection::Explicit(self.test_pages.clone())
        } else {
            PageSelection::All
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> CropArgs {
        let mut argv = vec!["pagecrop"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().crop
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.input, PathBuf::from("data/source/black_book"));
        assert_eq!(args.output, PathBuf::from("data/source/black_book_cropped"));
        assert_eq!(args.rect().unwrap(), CropRect::new(800, 200, 3200, 2500).unwrap());
        assert_eq!(args.selection(), PageSelection::All);
        assert!(args.report.is_none());
    }

    #[test]
    fn test_short_flags_and_bounds() {
        let args = parse(&[
            "-i", "in", "-o", "out", "--left", "1", "--top", "2", "--right", "30", "--bottom",
            "40",
        ]);
        assert_eq!(args.input, PathBuf::from("in"));
        assert_eq!(args.output, PathBuf::from("out"));
        let rect = args.rect().unwrap();
        assert_eq!((rect.width(), rect.height()), (29, 38));
    }

    #[test]
    fn test_test_mode_pages() {
        let args = parse(&["--test"]);
        assert_eq!(args.selection(), PageSelection::Explicit(vec![1, 10, 50]));
    }

    #[test]
    fn test_explicit_test_pages() {
        let args = parse(&["--test-pages", "2", "5"]);
        assert_eq!(args.selection(), PageSelection::Explicit(vec![2, 5]));
    }

    #[test]
    fn test_test_flag_takes_precedence() {
        let args = parse(&["--test-pages", "2", "5", "--test"]);
        assert_eq!(args.selection(), PageSelection::Explicit(vec![1, 10, 50]));
    }

    #[test]
    fn test_invalid_rect_rejected() {
        let args = parse(&["--left", "500", "--right", "400"]);
        assert!(args.rect().is_err());
    }

    #[test]
    fn test_negative_bounds_accepted() {
        let args = parse(&["--left", "-5", "--top", "-10", "--right", "20", "--bottom", "30"]);
        let rect = args.rect().unwrap();
        assert_eq!((rect.left(), rect.top()), (-5, -10));
        assert_eq!((rect.width(), rect.height()), (25, 40));
    }
}
