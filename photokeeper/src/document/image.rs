use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use image::imageops::FilterType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Defines errors that can occur while loading or transforming an image.
//
// // 定义在加载或变换图片时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The image file could not be read.
    //
    // // 无法读取图片文件。
    #[error("Failed to read image file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes could not be decoded or re-encoded as an image.
    //
    // // 无法将字节解码或重新编码为图片。
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// A resize was requested with a zero target height.
    //
    // // 请求缩放时目标高度为零。
    #[error("Invalid target height: {0}")]
    InvalidTargetHeight(u32),
}

/// An encoded image (PNG, JPEG, ...), kept as the raw bytes.
///
/// Two images are equal when their bytes are identical. Inside an archive the bytes
/// are stored as a standard base64 string.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Reads an image file and checks that its contents decode.
    pub fn open(path: &Path) -> Result<Self, ImageError> {
        let bytes = fs::read(path).map_err(|source| ImageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        image::load_from_memory(&bytes)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decodes the image and returns its `(width, height)` in pixels.
    pub fn dimensions(&self) -> Result<(u32, u32), ImageError> {
        let decoded = image::load_from_memory(&self.bytes)?;
        Ok((decoded.width(), decoded.height()))
    }

    /// Scales the image so its height is `target_height`, keeping the aspect ratio.
    ///
    /// The result is re-encoded as PNG.
    pub fn best_fit(&self, target_height: u32) -> Result<Image, ImageError> {
        if target_height == 0 {
            return Err(ImageError::InvalidTargetHeight(target_height));
        }
        let decoded = image::load_from_memory(&self.bytes)?;
        let aspect_ratio = decoded.width() as f64 / decoded.height().max(1) as f64;
        let scaled_width = ((target_height as f64) * aspect_ratio).round().max(1.0) as u32;

        let resized = decoded.resize_exact(scaled_width, target_height, FilterType::Triangle);
        let mut buffer = Cursor::new(Vec::new());
        resized.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(Image::from_bytes(buffer.into_inner()))
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image").field("len", &self.bytes.len()).finish()
    }
}

impl Serialize for Image {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.bytes))
    }
}

impl<'de> Deserialize<'de> for Image {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Image::from_bytes)
            .map_err(serde::de::Error::custom)
    }
}
