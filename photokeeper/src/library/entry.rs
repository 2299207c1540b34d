use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use crate::document::PhotoMetaData;
use crate::library::version::FileVersion;
use crate::utils::path::{display_name, file_name_string};

/// A list row: what the library knows about a document without keeping it open.
#[derive(Debug, Clone)]
pub struct Entry {
    pub file_path: PathBuf,
    pub metadata: Option<PhotoMetaData>,
    pub version: FileVersion,
}

impl Entry {
    pub fn new(file_path: impl Into<PathBuf>, metadata: Option<PhotoMetaData>, version: FileVersion) -> Self {
        Self {
            file_path: file_path.into(),
            metadata,
            version,
        }
    }

    /// The display name: the bundle's file name without its extension.
    pub fn description(&self) -> String {
        display_name(&self.file_path)
    }

    pub fn file_name(&self) -> String {
        file_name_string(&self.file_path)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// Entries order by modification time: the more recently modified entry is greater.
/// At equal times the alphabetically earlier description is greater, then the path
/// breaks the tie. Sorting descending therefore lists the newest first and
/// equally old entries alphabetically.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .modification_date()
            .cmp(&other.version.modification_date())
            .then_with(|| other.description().cmp(&self.description()))
            .then_with(|| other.file_path.cmp(&self.file_path))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}
