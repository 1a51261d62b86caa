//! # 处理结果与运行汇总
//!
//! 单页处理结果只在本次运行期间保留，用于计算汇总统计。
//!
//! ## 依赖关系
//! - 被 `imaging/crop.rs` 生成 (`CropStats`)
//! - 被 `batch/runner.rs`、`report/`、`commands/crop.rs` 使用

/// 字节换算为 MB
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// 体积缩减百分比 `(1 - new/original) * 100`
pub fn reduction_percent(original: u64, new: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - new as f64 / original as f64) * 100.0
}

/// 字节数转换为 MB
pub fn to_megabytes(bytes: f64) -> f64 {
    bytes / BYTES_PER_MB
}

/// 单页裁剪统计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropStats {
    /// 原始文件大小 (bytes)
    pub original_size: u64,
    /// 输出文件大小 (bytes)
    pub new_size: u64,
    /// 原始尺寸 (宽, 高)
    pub original_dims: (u32, u32),
    /// 输出尺寸 (宽, 高)
    pub new_dims: (u32, u32),
}

impl CropStats {
    pub fn reduction(&self) -> f64 {
        reduction_percent(self.original_size, self.new_size)
    }
}

/// 单页处理结果
#[derive(Debug, Clone)]
pub enum CropOutcome {
    /// 裁剪成功
    Cropped {
        file_name: String,
        page: u32,
        stats: CropStats,
    },
    /// 处理失败
    Failed {
        file_name: String,
        page: u32,
        error: String,
    },
}

impl CropOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            CropOutcome::Cropped { file_name, .. } | CropOutcome::Failed { file_name, .. } => {
                file_name
            }
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            CropOutcome::Cropped { page, .. } | CropOutcome::Failed { page, .. } => *page,
        }
    }

    pub fn stats(&self) -> Option<&CropStats> {
        match self {
            CropOutcome::Cropped { stats, .. } => Some(stats),
            CropOutcome::Failed { .. } => None,
        }
    }
}

/// 运行汇总（只统计成功页面）
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    /// 成功数量
    pub processed: usize,
    /// 失败数量
    pub failed: usize,
    /// 原始总字节数
    pub total_original: u64,
    /// 输出总字节数
    pub total_new: u64,
    /// 各页缩减百分比之和，用于求平均
    reduction_sum: f64,
}

impl RunSummary {
    /// 合并单页结果
    pub fn merge(&mut self, outcome: &CropOutcome) {
        match outcome {
            CropOutcome::Cropped { stats, .. } => {
                self.processed += 1;
                self.total_original += stats.original_size;
                self.total_new += stats.new_size;
                self.reduction_sum += stats.reduction();
            }
            CropOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// 由全部结果构建汇总
    pub fn from_outcomes(outcomes: &[CropOutcome]) -> Self {
        let mut summary = RunSummary::default();
        for outcome in outcomes {
            summary.merge(outcome);
        }
        summary
    }

    /// 平均每页缩减百分比
    pub fn average_reduction(&self) -> Option<f64> {
        if self.processed == 0 {
            return None;
        }
        Some(self.reduction_sum / self.processed as f64)
    }

    /// 按总字节数计算的缩减百分比
    pub fn total_reduction(&self) -> Option<f64> {
        if self.processed == 0 {
            return None;
        }
        Some(reduction_percent(self.total_original, self.total_new))
    }

    /// 节省的字节数（输出更大时为负）
    pub fn bytes_saved(&self) -> i64 {
        self.total_original as i64 - self.total_new as i64
    }
}
