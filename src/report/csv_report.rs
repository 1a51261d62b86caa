//! # CSV 报告
//!
//! 每个尝试处理的页面一行，失败页面只填写 `status` 和 `error`。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 调用
//! - 使用 `models/outcome.rs` 的 `CropOutcome`
//! - 使用 `csv` + `serde` 写入

use crate::error::{CropError, Result};
use crate::models::CropOutcome;

use serde::Serialize;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    file: &'a str,
    page: u32,
    status: &'static str,
    original_bytes: Option<u64>,
    new_bytes: Option<u64>,
    reduction_pct: Option<String>,
    original_width: Option<u32>,
    original_height: Option<u32>,
    new_width: Option<u32>,
    new_height: Option<u32>,
    error: Option<&'a str>,
}

impl<'a> From<&'a CropOutcome> for ReportRow<'a> {
    fn from(outcome: &'a CropOutcome) -> Self {
        match outcome {
            CropOutcome::Cropped {
                file_name,
                page,
                stats,
            } => ReportRow {
                file: file_name,
                page: *page,
                status: "ok",
                original_bytes: Some(stats.original_size),
                new_bytes: Some(stats.new_size),
                reduction_pct: Some(format!("{:.2}", stats.reduction())),
                original_width: Some(stats.original_dims.0),
                original_height: Some(stats.original_dims.1),
                new_width: Some(stats.new_dims.0),
                new_height: Some(stats.new_dims.1),
                error: None,
            },
            CropOutcome::Failed {
                file_name,
                page,
                error,
            } => ReportRow {
                file: file_name,
                page: *page,
                status: "failed",
                original_bytes: None,
                new_bytes: None,
                reduction_pct: None,
                original_width: None,
                original_height: None,
                new_width: None,
                new_height: None,
                error: Some(error.as_str()),
            },
        }
    }
}

/// 导出每页结果为 CSV
pub fn write_csv(outcomes: &[CropOutcome], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for outcome in outcomes {
        wtr.serialize(ReportRow::from(outcome))?;
    }

    wtr.flush().map_err(|e| CropError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropStats;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        let outcomes = vec![
            CropOutcome::Cropped {
                file_name: "page-01.png".to_string(),
                page: 1,
                stats: CropStats {
                    original_size: 1000,
                    new_size: 400,
                    original_dims: (100, 80),
                    new_dims: (50, 40),
                },
            },
            CropOutcome::Failed {
                file_name: "page-02.png".to_string(),
                page: 2,
                error: "bad data".to_string(),
            },
        ];

        write_csv(&outcomes, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines[0],
            "file,page,status,original_bytes,new_bytes,reduction_pct,original_width,original_height,new_width,new_height,error"
        );
        assert_eq!(lines[1], "page-01.png,1,ok,1000,400,60.00,100,80,50,40,");
        assert_eq!(lines[2], "page-02.png,2,failed,,,,,,,,bad data");
        assert_eq!(lines.len(), 3);
    }
}
