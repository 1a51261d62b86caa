//! # crop 命令实现
//!
//! 对输入目录中的页面图像应用统一的裁剪矩形并输出汇总统计。
//!
//! ## 功能
//! - 收集页面（全部或指定页码）
//! - 顺序裁剪并以 PNG 写出到输出目录（同名覆盖）
//! - 打印汇总：成功数量、裁剪边界、新尺寸、平均/总体缩减、节省空间
//! - 可选导出 CSV 报告与逐页表格
//!
//! ## 依赖关系
//! - 使用 `cli/crop.rs` 定义的参数
//! - 使用 `batch/`, `imaging/`, `report/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, PageCollector, PageSelection};
use crate::cli::crop::CropArgs;
use crate::error::{CropError, Result};
use crate::imaging;
use crate::models::{to_megabytes, CropOutcome, CropRect, RunSummary};
use crate::report;
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 逐页表格行
#[derive(Debug, Clone, Tabled)]
struct DetailRow {
    #[tabled(rename = "Page")]
    page: u32,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Original")]
    original_dims: String,
    #[tabled(rename = "Cropped")]
    new_dims: String,
    #[tabled(rename = "Size (KB)")]
    sizes: String,
    #[tabled(rename = "Reduction")]
    reduction: String,
}

/// 执行 crop 命令
pub fn execute(args: CropArgs) -> Result<()> {
    output::print_header("Cropping Page Images");

    let rect = args.rect()?;
    let selection = args.selection();
    let test_mode = selection != PageSelection::All;

    if let Some(result) = process_directory(&args.input, &args.output, rect, selection, true)? {
        let summary = result.summary();
        print_summary(&summary, rect);

        if args.details && summary.processed > 0 {
            print_details(&result.outcomes);
        }

        if let Some(ref report_path) = args.report {
            report::write_csv(&result.outcomes, report_path)?;
            output::print_success(&format!(
                "Per-page report saved to '{}'",
                report_path.display()
            ));
        }
    }

    // 即使没有找到页面，测试模式也给出提示
    if test_mode {
        print_test_hint(&args.output);
    }

    Ok(())
}

/// 测试模式结束提示
fn print_test_hint(output_dir: &Path) {
    println!();
    output::print_done(&format!(
        "Test complete! Check the cropped images in: {}",
        output_dir.display()
    ));
    output::print_info("If results look good, run without --test flag to process all pages.");
}

/// 裁剪目录中选中的页面
///
/// 没有可处理的页面时返回 `Ok(None)`，此时不会创建输出目录。
pub fn process_directory(
    input: &Path,
    output_dir: &Path,
    rect: CropRect,
    selection: PageSelection,
    show_progress: bool,
) -> Result<Option<BatchResult>> {
    let collected = PageCollector::new(input.to_path_buf(), selection).collect()?;

    for name in &collected.missing {
        output::print_warning(&format!("{} not found", name));
    }

    if collected.pages.is_empty() {
        output::print_warning("No PNG files found to process");
        return Ok(None);
    }

    fs::create_dir_all(output_dir).map_err(|e| CropError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    output::print_info(&format!("Processing {} files...", collected.pages.len()));

    let runner = BatchRunner::new("Cropping images").show_progress(show_progress);
    let result = runner.run(&collected.pages, |page| {
        imaging::crop_page(&page.path, &output_dir.join(&page.file_name), rect)
    });

    Ok(Some(result))
}

/// 打印汇总
fn print_summary(summary: &RunSummary, rect: CropRect) {
    output::print_header("CROPPING SUMMARY");

    output::print_field("Files processed", &summary.processed.to_string());
    if summary.failed > 0 {
        output::print_field("Files failed", &summary.failed.to_string());
    }
    output::print_field(
        "Crop boundaries",
        &format!(
            "Left={}, Top={}, Right={}, Bottom={}",
            rect.left(),
            rect.top(),
            rect.right(),
            rect.bottom()
        ),
    );
    output::print_field(
        "New dimensions",
        &format!("{}x{} pixels", rect.width(), rect.height()),
    );

    if let (Some(average), Some(total)) = (summary.average_reduction(), summary.total_reduction())
    {
        output::print_field("Average size reduction", &format!("{:.1}%", average));
        output::print_field("Total size reduction", &format!("{:.1}%", total));
        output::print_field(
            "Total original size",
            &format!("{:.1} MB", to_megabytes(summary.total_original as f64)),
        );
        output::print_field(
            "Total new size",
            &format!("{:.1} MB", to_megabytes(summary.total_new as f64)),
        );
        output::print_field(
            "Space saved",
            &format!("{:.1} MB", to_megabytes(summary.bytes_saved() as f64)),
        );
    }

    output::print_separator();
}

/// 打印逐页表格
fn print_details(outcomes: &[CropOutcome]) {
    let rows: Vec<DetailRow> = outcomes
        .iter()
        .filter_map(|outcome| {
            outcome.stats().map(|stats| DetailRow {
                page: outcome.page(),
                file: outcome.file_name().to_string(),
                original_dims: format!("{}x{}", stats.original_dims.0, stats.original_dims.1),
                new_dims: format!("{}x{}", stats.new_dims.0, stats.new_dims.1),
                sizes: format!(
                    "{:.1} -> {:.1}",
                    stats.original_size as f64 / 1024.0,
                    stats.new_size as f64 / 1024.0
                ),
                reduction: format!("{:.1}%", stats.reduction()),
            })
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
}
