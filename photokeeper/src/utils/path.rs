use std::path::Path;

/// Returns the display name of a document: its file name without the extension.
///
/// Examples:
/// - "/docs/Photo.ptk" -> "Photo"
/// - "/docs/Photo 1. ptk" -> "Photo 1"
/// - "/docs/notes" -> "notes"
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns the last path component as a string, or an empty string for paths without one.
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Checks that a user supplied name can be used as a single file name component.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
}
