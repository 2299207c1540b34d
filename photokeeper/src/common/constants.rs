/// File extension of a top-level document bundle.
pub const APP_EXTENSION: &str = "ptk";

// --- 文档包内的条目名 ---
/// Bundle entry holding the archived `PhotoData` (full resolution image).
pub const DATA_FILENAME: &str = "photo.data";

/// Bundle entry holding the archived `PhotoMetaData` (thumbnail and text).
pub const METADATA_FILENAME: &str = "photo.metadata";

// --- 归档格式 ---
/// The current version of the archive envelope.
pub const CURRENT_ARCHIVE_VERSION: u32 = 1;

/// Envelope key carrying the archive version.
pub const VERSION_KEY: &str = "Version";

/// Envelope key under which the archived record is stored.
pub const DATA_KEY: &str = "Data";

// --- 文档库 ---
/// Library directory used when no root is given, relative to the working directory.
pub const DEFAULT_LIBRARY_DIRNAME: &str = "PhotoKeeper";

/// Prefix used for new documents when no title is given.
pub const DEFAULT_DOCUMENT_PREFIX: &str = "Photo";

/// Filesystem artifacts that are never treated as documents.
pub const IGNORED_DIRECTORY_ENTRIES: &[&str] = &[".DS_Store"];

/// Default height, in pixels, of generated thumbnails.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 128;
