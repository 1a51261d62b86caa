//! # 裁剪矩形
//!
//! 以像素坐标 (left, top, right, bottom) 表示的保留区域，
//! 每次运行提供一次，统一应用到所有页面。
//!
//! 坐标允许为负或超出图像范围，超出部分在裁剪时以零像素填充。
//!
//! ## 依赖关系
//! - 被 `imaging/crop.rs`, `commands/crop.rs` 使用

use crate::error::{CropError, Result};

/// 裁剪矩形，保证 left < right 且 top < bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl CropRect {
    /// 创建并校验裁剪矩形
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        if left >= right {
            return Err(CropError::InvalidArgument(format!(
                "left ({}) must be less than right ({})",
                left, right
            )));
        }
        if top >= bottom {
            return Err(CropError::InvalidArgument(format!(
                "top ({}) must be less than bottom ({})",
                top, bottom
            )));
        }

        Ok(CropRect {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// 裁剪后宽度
    pub fn width(&self) -> u32 {
        (self.right as i64 - self.left as i64) as u32
    }

    /// 裁剪后高度
    pub fn height(&self) -> u32 {
        (self.bottom as i64 - self.top as i64) as u32
    }

    /// 检查矩形是否完全位于给定尺寸的图像内
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right as i64 <= width as i64
            && self.bottom as i64 <= height as i64
    }

    /// 与图像的重叠区域 `(x, y, width, height)`，图像坐标系；无重叠时返回 `None`
    pub fn overlap(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = (self.left as i64).max(0);
        let y0 = (self.top as i64).max(0);
        let x1 = (self.right as i64).min(width as i64);
        let y1 = (self.bottom as i64).min(height as i64);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
