use crate::document::{Document, DocumentError, Image, ImageError, PhotoEntry};

/// Edits one open document: a new photo and/or a new title.
///
/// Nothing is written until the outcome is handed back to the library with
/// [`Library::finish_detail`](crate::library::Library::finish_detail).
#[derive(Debug)]
pub struct DetailEditor {
    document: Document,
    new_image: Option<Image>,
    new_title: Option<String>,
    thumbnail_height: u32,
}

/// The result of a finished edit.
#[derive(Debug)]
pub struct DetailOutcome {
    pub document: Document,
    pub photo: Option<PhotoEntry>,
    pub title: Option<String>,
}

impl DetailEditor {
    pub fn new(document: Document, thumbnail_height: u32) -> Self {
        Self {
            document,
            new_image: None,
            new_title: None,
            thumbnail_height,
        }
    }

    /// The screen title: the document's display name.
    pub fn title(&self) -> String {
        self.document.description()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Records a picked image.
    pub fn set_image(&mut self, image: Image) {
        self.new_image = Some(image);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        let title = title.trim();
        self.new_title = if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        };
    }

    pub fn has_changes(&self) -> bool {
        self.new_image.is_some() || self.new_title.is_some()
    }

    /// Finishes editing. A picked image gets its thumbnail derived here.
    pub fn done(self) -> Result<DetailOutcome, ImageError> {
        let photo = match self.new_image {
            Some(image) => Some(PhotoEntry::from_image(image, self.thumbnail_height)?),
            None => None,
        };
        Ok(DetailOutcome {
            document: self.document,
            photo,
            title: self.new_title,
        })
    }

    /// Discards the edit and closes the document.
    pub fn cancel(self) -> Result<(), DocumentError> {
        self.document.close()
    }
}
