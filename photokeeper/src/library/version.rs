use std::fs;
use std::path::Path;
use chrono::{DateTime, Utc};

/// The version stamp of a document on disk: its last modification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileVersion {
    modified: DateTime<Utc>,
}

impl FileVersion {
    pub fn new(modified: DateTime<Utc>) -> Self {
        Self { modified }
    }

    /// Resolves the current version of the item at `path`.
    ///
    /// Returns `None` when the item is missing or the platform does not report a
    /// modification time.
    pub fn current_version_of_item(path: &Path) -> Option<Self> {
        let modified = fs::metadata(path).ok()?.modified().ok()?;
        Some(Self::new(DateTime::<Utc>::from(modified)))
    }

    pub fn modification_date(&self) -> DateTime<Utc> {
        self.modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_item_has_no_version() {
        let dir = tempdir().unwrap();
        assert!(FileVersion::current_version_of_item(&dir.path().join("nope.ptk")).is_none());
    }

    #[test]
    fn test_existing_item_has_version() {
        let dir = tempdir().unwrap();
        let version = FileVersion::current_version_of_item(dir.path()).unwrap();
        let age = Utc::now() - version.modification_date();
        assert!(age.num_minutes() < 5);
    }
}
