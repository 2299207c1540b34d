use std::fs;
use std::path::{Path, PathBuf};
use crate::document::{DocumentError, ImageError, PhotoEntry, PhotoMetaData, TextData};

pub mod config;
mod create;
mod detail;
mod edit;
pub mod entry;
mod load;
pub mod mode;
pub mod naming;
mod reconcile;
mod rename;
pub mod version;

pub use config::{ConfigError, LibraryConfig, MatchPolicy};
pub use detail::{DetailEditor, DetailOutcome};
pub use entry::Entry;
pub use load::LoadReport;
pub use mode::{Mode, ModeEffects};
pub use rename::RenameError;
pub use version::FileVersion;

/// Defines errors that can occur during library operations.
//
// // 定义在文档库操作期间可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The library root could not be created.
    //
    // // 无法创建文档库根目录。
    #[error("Failed to create library root {path}: {source}")]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The library root could not be listed.
    //
    // // 无法列出文档库根目录。
    #[error("Couldn't load local content from {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening, saving or closing a document failed.
    //
    // // 打开、保存或关闭文档失败。
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// A picked image could not be turned into a photo.
    //
    // // 无法将选中的图片转换为照片。
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// A document title cannot be used as a file name.
    //
    // // 文档标题不能用作文件名。
    #[error("Invalid document name '{0}': must be a single non-empty file name.")]
    InvalidFilename(String),

    /// No list entry matches.
    //
    // // 没有匹配的列表条目。
    #[error("No entry named '{0}'.")]
    EntryNotFound(String),

    /// Renaming a document failed.
    //
    // // 重命名文档失败。
    #[error("Rename failed: {0}")]
    Rename(#[from] RenameError),
}

/// The list of documents found in one root directory.
///
/// The library is the only owner and mutator of its entries. After every insert or
/// update the list is sorted newest first.
#[derive(Debug)]
pub struct Library {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<Entry>,
    pub(crate) match_policy: MatchPolicy,
    pub(crate) thumbnail_height: u32,
    pub(crate) mode: Mode,
}

impl Library {
    /// Opens a library on `config.root`, creating the directory if needed.
    ///
    /// The entry list starts empty; call [`Library::load_local`] to scan the root.
    pub fn open(config: &LibraryConfig) -> Result<Self, LibraryError> {
        fs::create_dir_all(&config.root).map_err(|source| LibraryError::CreateRoot {
            path: config.root.clone(),
            source,
        })?;
        Ok(Self {
            root: config.root.clone(),
            entries: Vec::new(),
            match_policy: config.match_policy,
            thumbnail_height: config.thumbnail_height,
            mode: Mode::default(),
        })
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Result<Self, LibraryError> {
        Self::open(&LibraryConfig::with_root(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.match_policy
    }

    pub fn set_match_policy(&mut self, policy: MatchPolicy) {
        self.match_policy = policy;
    }

    pub fn thumbnail_height(&self) -> u32 {
        self.thumbnail_height
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry with the given description.
    pub fn find(&self, description: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.description() == description)
    }

    pub fn entry_for_path(&self, file_path: &Path) -> Option<&Entry> {
        self.entries.iter().find(|e| e.file_path == file_path)
    }

    /// The path of a document named `file_name` inside the root.
    pub fn document_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    // --- 扫描 ---

    /// Scans the root and reconciles every document found. See [`LoadReport`].
    pub fn load_local(&mut self) -> Result<LoadReport, LibraryError> {
        load::load_local(self)
    }

    /// Rescans the root.
    pub fn refresh(&mut self) -> Result<LoadReport, LibraryError> {
        self.load_local()
    }

    /// Opens one document, reads its metadata, closes it and reconciles it.
    ///
    /// Returns `Ok(false)` when no version stamp could be resolved; the document is
    /// then skipped.
    pub fn load_doc(&mut self, file_path: &Path) -> Result<bool, DocumentError> {
        load::load_doc(self, file_path)
    }

    // --- 列表维护 ---

    pub fn add_or_update_entry(
        &mut self,
        file_path: &Path,
        metadata: Option<PhotoMetaData>,
        version: FileVersion,
    ) {
        reconcile::add_or_update_entry(self, file_path, metadata, version)
    }

    /// Removes the entry with the same path as `entry`, or failing that the first one
    /// with the same description.
    ///
    /// Only the list changes: the bundle stays on disk and reappears on the next
    /// scan. Returns `false` when no entry matched.
    pub fn delete(&mut self, entry: &Entry) -> bool {
        reconcile::delete(self, entry)
    }

    // --- 创建与重命名 ---

    /// A file name for a new document that no entry and no item in the root uses yet.
    pub fn doc_file_name(&self, prefix: &str) -> String {
        create::doc_file_name(self, prefix)
    }

    /// Creates and saves a new document, then adds it to the list.
    pub fn insert_new_document(
        &mut self,
        photo: Option<PhotoEntry>,
        title: Option<&str>,
    ) -> Result<PathBuf, LibraryError> {
        create::insert_new_document(self, photo, title)
    }

    /// Renames the bundle behind `entry`, keeping the extension and a unique name.
    pub fn rename(&mut self, entry: &Entry, new_name: &str) -> Result<PathBuf, RenameError> {
        rename::rename(self, entry, new_name)
    }

    // --- 编辑 ---

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) -> ModeEffects {
        self.mode = mode;
        mode.effects()
    }

    pub fn toggle_mode(&mut self) -> ModeEffects {
        self.set_mode(self.mode.other_mode())
    }

    /// Opens the full document behind `entry` for editing.
    pub fn select(&mut self, entry: &Entry) -> Result<DetailEditor, LibraryError> {
        edit::select(self, entry)
    }

    /// Saves a finished edit and brings the entry up to date.
    pub fn finish_detail(&mut self, outcome: DetailOutcome) -> Result<PathBuf, LibraryError> {
        edit::finish_detail(self, outcome)
    }

    /// Replaces the title and note stored with `entry`.
    pub fn update_text(&mut self, entry: &Entry, text: TextData) -> Result<(), LibraryError> {
        edit::update_text(self, entry, text)
    }
}
