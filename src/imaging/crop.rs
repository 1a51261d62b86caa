//! # 单页裁剪
//!
//! 读取一张页面图像，按固定矩形裁剪，以最高压缩级别写出 PNG，
//! 并记录裁剪前后的文件大小与像素尺寸。
//!
//! 矩形超出图像的部分以零像素填充，输出尺寸始终等于矩形尺寸。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 调用
//! - 使用 `models/rect.rs`, `models/outcome.rs`
//! - 使用 `image` crate 解码与编码

use crate::error::{CropError, Result};
use crate::models::{CropRect, CropStats};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{imageops, DynamicImage, GenericImageView, ImageReader};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// 裁剪单张页面并写出到 `output`（已存在则覆盖）
pub fn crop_page(input: &Path, output: &Path, rect: CropRect) -> Result<CropStats> {
    let original_size = file_size(input)?;

    let img = ImageReader::open(input)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| CropError::FileReadError {
            path: input.display().to_string(),
            source: e,
        })?
        .decode()
        .map_err(|e| CropError::DecodeError {
            path: input.display().to_string(),
            source: e,
        })?;

    let (width, height) = img.dimensions();
    let cropped = crop_padded(&img, rect);
    write_png(&cropped, output)?;

    let new_size = file_size(output)?;

    Ok(CropStats {
        original_size,
        new_size,
        original_dims: (width, height),
        new_dims: cropped.dimensions(),
    })
}

/// 按矩形裁剪，超出图像的区域填零
pub fn crop_padded(img: &DynamicImage, rect: CropRect) -> DynamicImage {
    let (width, height) = img.dimensions();

    if rect.fits_within(width, height) {
        return img.crop_imm(
            rect.left() as u32,
            rect.top() as u32,
            rect.width(),
            rect.height(),
        );
    }

    let mut canvas = DynamicImage::new(rect.width(), rect.height(), img.color());
    if let Some((x, y, w, h)) = rect.overlap(width, height) {
        let visible = img.crop_imm(x, y, w, h);
        imageops::replace(
            &mut canvas,
            &visible,
            x as i64 - rect.left() as i64,
            y as i64 - rect.top() as i64,
        );
    }
    canvas
}

/// 以最高压缩级别和自适应滤波写出 PNG
pub fn write_png(img: &DynamicImage, output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|e| CropError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| CropError::EncodeError {
            path: output.display().to_string(),
            source: e,
        })?;

    writer.flush().map_err(|e| CropError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })
}

fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| CropError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn write_gradient_page(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn test_crop_page_dimensions_and_pixels() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page-01.png");
        let output = dir.path().join("out.png");
        write_gradient_page(&input, 60, 40);

        let rect = CropRect::new(10, 5, 50, 30).unwrap();
        let stats = crop_page(&input, &output, rect).unwrap();

        assert_eq!(stats.original_dims, (60, 40));
        assert_eq!(stats.new_dims, (40, 25));
        assert_eq!(stats.original_size, fs::metadata(&input).unwrap().len());
        assert_eq!(stats.new_size, fs::metadata(&output).unwrap().len());

        let written = image::open(&output).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (40, 25));
        assert_eq!(*written.get_pixel(0, 0), Rgb([10, 5, 15]));
        assert_eq!(*written.get_pixel(39, 24), Rgb([49, 29, 78]));
    }

    #[test]
    fn test_crop_page_full_image_rect() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page-02.png");
        let output = dir.path().join("out.png");
        write_gradient_page(&input, 16, 12);

        let rect = CropRect::new(0, 0, 16, 12).unwrap();
        let stats = crop_page(&input, &output, rect).unwrap();
        assert_eq!(stats.new_dims, (16, 12));
    }

    #[test]
    fn test_crop_page_pads_outside_image() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page-03.png");
        let output = dir.path().join("out.png");
        write_gradient_page(&input, 20, 20);

        let rect = CropRect::new(5, 5, 30, 25).unwrap();
        let stats = crop_page(&input, &output, rect).unwrap();
        assert_eq!(stats.new_dims, (25, 20));

        let written = image::open(&output).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (25, 20));
        assert_eq!(*written.get_pixel(0, 0), Rgb([5, 5, 10]));
        assert_eq!(*written.get_pixel(14, 14), Rgb([19, 19, 38]));
        assert_eq!(*written.get_pixel(15, 0), Rgb([0, 0, 0]));
        assert_eq!(*written.get_pixel(0, 15), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_crop_padded_negative_origin() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([200, 100, 50])));

        let rect = CropRect::new(-3, -2, 5, 6).unwrap();
        let cropped = crop_padded(&img, rect).to_rgb8();

        assert_eq!(cropped.dimensions(), (8, 8));
        assert_eq!(*cropped.get_pixel(2, 1), Rgb([0, 0, 0]));
        assert_eq!(*cropped.get_pixel(3, 2), Rgb([200, 100, 50]));
        assert_eq!(*cropped.get_pixel(7, 7), Rgb([200, 100, 50]));
    }

    #[test]
    fn test_crop_padded_without_overlap() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 255, 255])));

        let rect = CropRect::new(20, 20, 24, 23).unwrap();
        let cropped = crop_padded(&img, rect).to_rgb8();

        assert_eq!(cropped.dimensions(), (4, 3));
        assert!(cropped.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_crop_page_corrupted_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page-04.png");
        let output = dir.path().join("out.png");
        fs::write(&input, b"definitely not a png").unwrap();

        let rect = CropRect::new(0, 0, 2, 2).unwrap();
        let err = crop_page(&input, &output, rect).unwrap_err();
        assert!(matches!(err, CropError::DecodeError { .. }));
    }

    #[test]
    fn test_crop_page_overwrites_identically() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page-05.png");
        let output = dir.path().join("out.png");
        write_gradient_page(&input, 32, 32);

        let rect = CropRect::new(4, 4, 28, 20).unwrap();
        crop_page(&input, &output, rect).unwrap();
        let first = fs::read(&output).unwrap();

        crop_page(&input, &output, rect).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }
}
