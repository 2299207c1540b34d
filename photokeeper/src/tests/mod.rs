use std::io::Cursor;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use crate::document::Image;


/// 辅助函数：生成一张纯色 PNG 图片。
pub(crate) fn png_image(width: u32, height: u32) -> Image {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 40, 40])));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    Image::from_bytes(buffer.into_inner())
}
