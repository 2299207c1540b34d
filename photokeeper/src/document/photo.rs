use serde::{Deserialize, Serialize};
use crate::document::image::{Image, ImageError};
use crate::document::text::TextData;

/// The full resolution half of a document, stored in `photo.data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoData {
    #[serde(rename = "Photo", skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// The lightweight half of a document, stored in `photo.metadata`.
///
/// This is what the library reads to render a list row without loading the full image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoMetaData {
    // 键名拼写是磁盘格式的一部分
    #[serde(rename = "Thumbmail", alias = "Thumbnail", skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(rename = "Text")]
    pub text: TextData,
}

/// A main image together with its thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoEntry {
    pub main_image: Option<Image>,
    pub thumbnail_image: Option<Image>,
}

impl PhotoEntry {
    pub fn new(main_image: Option<Image>, thumbnail_image: Option<Image>) -> Self {
        Self {
            main_image,
            thumbnail_image,
        }
    }

    /// Builds an entry from a picked image, deriving the thumbnail with [`Image::best_fit`].
    pub fn from_image(image: Image, thumbnail_height: u32) -> Result<Self, ImageError> {
        let thumbnail = image.best_fit(thumbnail_height)?;
        Ok(Self::new(Some(image), Some(thumbnail)))
    }
}
