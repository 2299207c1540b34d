use std::io;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use crate::common::constants::{DATA_FILENAME, METADATA_FILENAME};
use crate::utils::path::display_name;

pub mod archive;
pub mod bundle;
pub mod image;
pub mod photo;
pub mod text;

pub use archive::ArchiveError;
pub use bundle::Bundle;
pub use image::{Image, ImageError};
pub use photo::{PhotoData, PhotoEntry, PhotoMetaData};
pub use text::TextData;

/// Defines errors that can occur while opening, saving or closing a document.
//
// // 定义在打开、保存或关闭文档时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Nothing exists at the document path.
    //
    // // 文档路径下不存在任何内容。
    #[error("Document not found at {0}")]
    NotFound(PathBuf),

    /// The path exists but is not a bundle directory.
    //
    // // 路径存在，但不是文档包目录。
    #[error("Not a document bundle: {0}")]
    NotABundle(PathBuf),

    /// A save for creation found the target already present.
    //
    // // 以创建方式保存时目标已存在。
    #[error("Document already exists at {0}")]
    AlreadyExists(PathBuf),

    /// An archive entry is present but its bytes are corrupt.
    //
    // // 归档条目存在，但其字节已损坏。
    #[error("Corrupt entry '{entry}': {source}")]
    CorruptEntry {
        entry: String,
        #[source]
        source: ArchiveError,
    },

    /// A record could not be archived.
    //
    // // 无法归档记录。
    #[error("Failed to archive document: {0}")]
    Archive(#[from] ArchiveError),

    /// An I/O error occurred while reading or writing the bundle.
    //
    // // 读写文档包时发生 I/O 错误。
    #[error("Document I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How [`Document::save`] treats an existing target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOperation {
    /// The target must not exist yet.
    ForCreating,
    /// The target is replaced if it exists.
    ForOverwriting,
}

/// An open photo document.
///
/// Both halves are decoded when the document is opened; the document owns them until
/// it is closed. Closing writes pending changes back to the bundle.
#[derive(Debug)]
pub struct Document {
    file_path: PathBuf,
    photo_data: PhotoData,
    meta_data: PhotoMetaData,
    has_changes: bool,
}

impl Document {
    /// Creates an empty document that is not on disk yet.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            photo_data: PhotoData::default(),
            meta_data: PhotoMetaData::default(),
            has_changes: false,
        }
    }

    /// Opens the bundle at `file_path` and decodes both of its entries.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self, DocumentError> {
        let file_path = file_path.into();
        if !file_path.exists() {
            return Err(DocumentError::NotFound(file_path));
        }
        if !file_path.is_dir() {
            return Err(DocumentError::NotABundle(file_path));
        }

        let bundle = Bundle::read_from(&file_path)?;
        Self::load_from_contents(file_path, &bundle)
    }

    /// Decodes a document from an in-memory bundle.
    pub fn load_from_contents(
        file_path: impl Into<PathBuf>,
        contents: &Bundle,
    ) -> Result<Self, DocumentError> {
        let file_path = file_path.into();
        let photo_data = decode_entry::<PhotoData>(&file_path, contents, DATA_FILENAME)?;
        let meta_data = decode_entry::<PhotoMetaData>(&file_path, contents, METADATA_FILENAME)?;
        Ok(Self {
            file_path,
            photo_data,
            meta_data,
            has_changes: false,
        })
    }

    /// Archives both halves into a bundle, one entry each.
    pub fn contents(&self) -> Result<Bundle, DocumentError> {
        let mut bundle = Bundle::new();
        bundle.insert(METADATA_FILENAME, archive::encode(&self.meta_data)?);
        bundle.insert(DATA_FILENAME, archive::encode(&self.photo_data)?);
        Ok(bundle)
    }

    /// Writes the document to `to`. On success `to` becomes the document's path.
    pub fn save(&mut self, to: &Path, operation: SaveOperation) -> Result<(), DocumentError> {
        let contents = self.contents()?;
        let create_new = operation == SaveOperation::ForCreating;
        if create_new && to.exists() {
            return Err(DocumentError::AlreadyExists(to.to_path_buf()));
        }

        contents.write_to(to, create_new).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                DocumentError::AlreadyExists(to.to_path_buf())
            } else {
                DocumentError::Io(e)
            }
        })?;

        self.file_path = to.to_path_buf();
        self.has_changes = false;
        Ok(())
    }

    /// Closes the document, saving over its own path if it has unsaved changes.
    pub fn close(mut self) -> Result<(), DocumentError> {
        if self.has_changes {
            let path = self.file_path.clone();
            self.save(&path, SaveOperation::ForOverwriting)?;
        }
        Ok(())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The display name: the bundle's file name without its extension.
    pub fn description(&self) -> String {
        display_name(&self.file_path)
    }

    pub fn photo_data(&self) -> &PhotoData {
        &self.photo_data
    }

    pub fn meta_data(&self) -> &PhotoMetaData {
        &self.meta_data
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_changes
    }

    /// The main image and the thumbnail, taken from the two halves.
    pub fn photo(&self) -> PhotoEntry {
        PhotoEntry::new(self.photo_data.image.clone(), self.meta_data.image.clone())
    }

    /// Replaces both images. `None` clears them.
    pub fn set_photo(&mut self, photo: Option<PhotoEntry>) {
        let photo = photo.unwrap_or_default();
        self.photo_data.image = photo.main_image;
        self.meta_data.image = photo.thumbnail_image;
        self.has_changes = true;
    }

    pub fn text(&self) -> &TextData {
        &self.meta_data.text
    }

    pub fn set_text(&mut self, text: TextData) {
        self.meta_data.text = text;
        self.has_changes = true;
    }
}

/// 解码一个条目；缺失或类型不符时退回空值，字节损坏时报错。
fn decode_entry<T: DeserializeOwned + Default>(
    file_path: &Path,
    contents: &Bundle,
    name: &str,
) -> Result<T, DocumentError> {
    let Some(bytes) = contents.get(name) else {
        debug!("{}: no '{}' entry, using an empty value", file_path.display(), name);
        return Ok(T::default());
    };

    match archive::decode::<T>(bytes) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => {
            warn!(
                "{}: entry '{}' does not hold the expected record, using an empty value",
                file_path.display(),
                name
            );
            Ok(T::default())
        }
        Err(source) => Err(DocumentError::CorruptEntry {
            entry: name.to_string(),
            source,
        }),
    }
}
