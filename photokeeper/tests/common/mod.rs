#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use photokeeper::document::Image;
use photokeeper::library::Library;
use tempfile::TempDir;

/// 辅助函数：在临时目录中创建一个空的文档库。
///
/// 返回 `(PathBuf, Library)` 元组，让测试既能访问根目录，又能获得 Library 实例。
pub fn setup_library(dir: &TempDir) -> (PathBuf, Library) {
    let root = dir.path().join("documents");
    let library = Library::with_root(&root).unwrap();
    (root, library)
}

/// 辅助函数：生成一张纯色 PNG 图片。
pub fn png_image(width: u32, height: u32) -> Image {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([30, 160, 90])));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    Image::from_bytes(buffer.into_inner())
}

/// 辅助函数：把一张 PNG 写到临时目录中，模拟用户从相册选中的文件。
pub fn create_image_file(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, png_image(width, height).as_bytes()).unwrap();
    path
}
