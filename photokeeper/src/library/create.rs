use std::path::PathBuf;
use log::{info, warn};
use crate::common::constants::DEFAULT_DOCUMENT_PREFIX;
use crate::document::{Document, PhotoEntry, SaveOperation};
use crate::library::naming::unique_file_name;
use crate::library::{FileVersion, Library, LibraryError};
use crate::utils::path::is_valid_name;

pub(crate) fn doc_file_name(library: &Library, prefix: &str) -> String {
    unique_file_name(prefix, |candidate| {
        library.entries.iter().any(|e| e.file_name() == candidate)
            || library.document_path(candidate).exists()
    })
}

/// 创建一个新文档，保存到磁盘，并像扫描到的文档一样加入列表。
pub(crate) fn insert_new_document(
    library: &mut Library,
    photo: Option<PhotoEntry>,
    title: Option<&str>,
) -> Result<PathBuf, LibraryError> {
    // 1. 确定文件名
    let prefix = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_DOCUMENT_PREFIX);
    if !is_valid_name(prefix) {
        return Err(LibraryError::InvalidFilename(prefix.to_string()));
    }
    let file_path = library.document_path(&doc_file_name(library, prefix));

    // 2. 构建文档
    let mut document = Document::new(&file_path);
    document.set_photo(photo);

    // 3. 保存
    document.save(&file_path, SaveOperation::ForCreating)?;
    info!("File created at: {}", file_path.display());

    // 4. 加入列表
    let metadata = document.meta_data().clone();
    match FileVersion::current_version_of_item(&file_path) {
        Some(version) => library.add_or_update_entry(&file_path, Some(metadata), version),
        None => warn!("No version for new document {}, not listed", file_path.display()),
    }
    Ok(file_path)
}
