use std::path::PathBuf;
use crate::document::{Document, TextData};
use crate::library::{DetailEditor, DetailOutcome, Entry, Library, LibraryError, Mode};

pub(crate) fn select(library: &mut Library, entry: &Entry) -> Result<DetailEditor, LibraryError> {
    let document = Document::open(&entry.file_path)?;
    library.mode = Mode::Viewing;
    Ok(DetailEditor::new(document, library.thumbnail_height))
}

/// 保存编辑结果：先写入照片并关闭文档，再刷新条目，最后按需重命名。
pub(crate) fn finish_detail(
    library: &mut Library,
    outcome: DetailOutcome,
) -> Result<PathBuf, LibraryError> {
    let DetailOutcome {
        mut document,
        photo,
        title,
    } = outcome;

    if let Some(photo) = photo {
        document.set_photo(Some(photo));
    }
    let file_path = document.file_path().to_path_buf();
    document.close()?;
    library.load_doc(&file_path)?;

    let Some(title) = title else {
        return Ok(file_path);
    };
    let entry = library
        .entry_for_path(&file_path)
        .cloned()
        .ok_or_else(|| LibraryError::EntryNotFound(file_path.display().to_string()))?;
    Ok(library.rename(&entry, &title)?)
}

pub(crate) fn update_text(
    library: &mut Library,
    entry: &Entry,
    text: TextData,
) -> Result<(), LibraryError> {
    let mut document = Document::open(&entry.file_path)?;
    document.set_text(text);
    let file_path = document.file_path().to_path_buf();
    document.close()?;
    library.load_doc(&file_path)?;
    Ok(())
}
