use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::common::constants::IGNORED_DIRECTORY_ENTRIES;
use crate::document::{Document, DocumentError};
use crate::library::{FileVersion, Library, LibraryError};
use crate::utils::path::file_name_string;
use crate::utils::time::to_rfc3339_string;

/// What a scan of the library root did with each directory entry.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Documents that were added or updated.
    pub loaded: Vec<PathBuf>,
    /// Filesystem artifacts and documents without a version stamp.
    pub skipped: Vec<PathBuf>,
    /// Paths that could not be opened or closed as documents.
    pub failed: Vec<(PathBuf, DocumentError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

fn is_ignored(path: &Path) -> bool {
    let name = file_name_string(path);
    IGNORED_DIRECTORY_ENTRIES
        .iter()
        .any(|ignored| name.contains(ignored))
}

/// 扫描根目录并逐个加载文档。
///
/// Entries are processed in file name order. A document that fails to open is
/// recorded in the report and the scan continues.
pub(crate) fn load_local(library: &mut Library) -> Result<LoadReport, LibraryError> {
    let list_error = |source| LibraryError::ListDirectory {
        path: library.root.clone(),
        source,
    };

    // 1. 列出根目录
    let mut paths = fs::read_dir(&library.root)
        .map_err(list_error)?
        .map(|item| item.map(|e| e.path()))
        .collect::<Result<Vec<PathBuf>, _>>()
        .map_err(list_error)?;
    paths.sort();

    // 2. 逐个加载
    let mut report = LoadReport::default();
    for path in paths {
        if is_ignored(&path) {
            debug!("Skipping filesystem artifact {}", path.display());
            report.skipped.push(path);
            continue;
        }
        match load_doc(library, &path) {
            Ok(true) => report.loaded.push(path),
            Ok(false) => report.skipped.push(path),
            Err(e) => {
                warn!("Failed to load document {}: {}", path.display(), e);
                report.failed.push((path, e));
            }
        }
    }
    Ok(report)
}

/// 打开 -> 读取元数据 -> 关闭 -> 解析版本 -> 对账。每一步都在上一步成功后进行。
pub(crate) fn load_doc(library: &mut Library, file_path: &Path) -> Result<bool, DocumentError> {
    let document = Document::open(file_path)?;
    let metadata = document.meta_data().clone();
    let document_path = document.file_path().to_path_buf();
    document.close()?;

    let Some(version) = FileVersion::current_version_of_item(&document_path) else {
        debug!("No version for {}, skipping", document_path.display());
        return Ok(false);
    };

    debug!(
        "Loaded {} (modified {})",
        document_path.display(),
        to_rfc3339_string(&version.modification_date())
    );
    library.add_or_update_entry(&document_path, Some(metadata), version);
    Ok(true)
}
