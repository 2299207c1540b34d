use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use log::warn;
use tempfile::NamedTempFile;

/// A directory-style container of named entries.
///
/// On disk a bundle is a directory whose regular files are the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: BTreeMap<String, Vec<u8>>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, contents: Vec<u8>) {
        self.entries.insert(name.into(), contents);
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads every regular file directly inside `dir` as an entry.
    pub fn read_from(dir: &Path) -> io::Result<Self> {
        let mut bundle = Bundle::new();
        for item in fs::read_dir(dir)? {
            let item = item?;
            if !item.file_type()?.is_file() {
                continue;
            }
            let Ok(name) = item.file_name().into_string() else {
                continue;
            };
            bundle.insert(name, fs::read(item.path())?);
        }
        Ok(bundle)
    }

    /// Writes all entries into `dir`.
    ///
    /// With `create_new` the directory must not exist yet, and it is removed again if
    /// any entry fails to write. Each entry goes to a temp file inside the bundle first
    /// and is then persisted over its final name, so a reader never sees a half-written
    /// entry.
    pub fn write_to(&self, dir: &Path, create_new: bool) -> io::Result<()> {
        if !create_new {
            fs::create_dir_all(dir)?;
            return self.write_entries(dir);
        }

        fs::create_dir(dir)?;
        if let Err(e) = self.write_entries(dir) {
            if let Err(cleanup) = fs::remove_dir_all(dir) {
                warn!("Failed to remove partial bundle {}: {}", dir.display(), cleanup);
            }
            return Err(e);
        }
        Ok(())
    }

    fn write_entries(&self, dir: &Path) -> io::Result<()> {
        for (name, contents) in &self.entries {
            // 必须在同一目录下创建临时文件，rename 才是原子的
            let mut temp_file = NamedTempFile::new_in(dir)?;
            temp_file.write_all(contents)?;
            temp_file.as_file().sync_all()?;
            temp_file.persist(dir.join(name)).map_err(|e| e.error)?;
        }
        Ok(())
    }
}
