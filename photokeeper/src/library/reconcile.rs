use std::path::Path;
use log::debug;
use crate::document::PhotoMetaData;
use crate::library::{Entry, FileVersion, Library, MatchPolicy};

/// 根据匹配策略查找已有条目。
fn index_of_entry_for(library: &Library, file_path: &Path) -> Option<usize> {
    match library.match_policy {
        MatchPolicy::FilePath => library
            .entries
            .iter()
            .position(|e| e.file_path == file_path),
        MatchPolicy::Description => {
            let key = file_path.to_string_lossy();
            index_of_entry(library, &key)
        }
    }
}

fn index_of_entry(library: &Library, description: &str) -> Option<usize> {
    library
        .entries
        .iter()
        .position(|e| e.description() == description)
}

pub(crate) fn sort_entries(library: &mut Library) {
    library.entries.sort_by(|a, b| b.cmp(a));
}

pub(crate) fn add_or_update_entry(
    library: &mut Library,
    file_path: &Path,
    metadata: Option<PhotoMetaData>,
    version: FileVersion,
) {
    match index_of_entry_for(library, file_path) {
        Some(index) => {
            let entry = &mut library.entries[index];
            entry.metadata = metadata;
            entry.version = version;
            debug!("Updated entry {}", file_path.display());
        }
        None => {
            library.entries.push(Entry::new(file_path, metadata, version));
            debug!("Added entry {}", file_path.display());
        }
    }
    sort_entries(library);
}

/// 先按完整路径查找，找不到时再按描述查找。
pub(crate) fn delete(library: &mut Library, entry: &Entry) -> bool {
    let index = library
        .entries
        .iter()
        .position(|e| e.file_path == entry.file_path)
        .or_else(|| index_of_entry(library, &entry.description()));
    let Some(index) = index else {
        return false;
    };
    library.entries.remove(index);
    true
}
