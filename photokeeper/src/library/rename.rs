use std::fs;
use std::path::PathBuf;
use log::info;
use crate::library::naming::unique_file_name;
use crate::library::reconcile::sort_entries;
use crate::library::{FileVersion, Library};
use crate::library::entry::Entry;
use crate::utils::path::is_valid_name;

/// Defines errors that can occur while renaming a document.
//
// // 定义在重命名文档时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// The new name is empty or contains path separators (`/` or `\`).
    //
    // // 新名称为空或包含路径分隔符 (`/` 或 `\`)。
    #[error("Invalid new name '{0}': must be a single non-empty file name.")]
    InvalidFilename(String),

    /// The entry to rename is not in the list.
    //
    // // 要重命名的条目不在列表中。
    #[error("Entry '{0}' not found.")]
    EntryNotFound(String),

    /// The bundle could not be moved on disk.
    //
    // // 无法在磁盘上移动文档包。
    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// 重命名条目背后的文档包。
///
/// The new file name follows the same rules as a new document's, so the extension is
/// kept and a name already used by another entry or present on disk gets a numbered
/// suffix. Renaming to the current description is a no-op.
pub(crate) fn rename(
    library: &mut Library,
    entry: &Entry,
    new_name: &str,
) -> Result<PathBuf, RenameError> {
    // 1. 验证新名称
    let new_name = new_name.trim();
    if !is_valid_name(new_name) {
        return Err(RenameError::InvalidFilename(new_name.to_string()));
    }

    // 2. 查找条目
    let index = library
        .entries
        .iter()
        .position(|e| e.file_path == entry.file_path)
        .ok_or_else(|| RenameError::EntryNotFound(entry.description()))?;

    let old_path = library.entries[index].file_path.clone();
    if library.entries[index].description() == new_name {
        return Ok(old_path);
    }

    // 3. 选出唯一的文件名 (排除自身)
    let file_name = unique_file_name(new_name, |candidate| {
        library
            .entries
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.file_name() == candidate)
            || (library.root.join(candidate) != old_path && library.root.join(candidate).exists())
    });
    let new_path = library.root.join(file_name);

    // 4. 移动文档包并更新条目
    fs::rename(&old_path, &new_path)?;
    info!("Renamed {} to {}", old_path.display(), new_path.display());

    let entry = &mut library.entries[index];
    entry.file_path = new_path.clone();
    if let Some(version) = FileVersion::current_version_of_item(&new_path) {
        entry.version = version;
    }
    sort_entries(library);
    Ok(new_path)
}
