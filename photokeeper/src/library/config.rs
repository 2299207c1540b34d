use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::common::constants::{DEFAULT_LIBRARY_DIRNAME, DEFAULT_THUMBNAIL_HEIGHT};

/// Defines errors that can occur while loading or saving a library configuration.
//
// // 定义在加载或保存文档库配置时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    //
    // // 无法读写配置文件。
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for this structure.
    //
    // // 配置文件不是该结构的合法 JSON。
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How a scanned document is matched to an existing list entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPolicy {
    /// Same full bundle path.
    #[default]
    FilePath,
    /// The candidate path's string form equals an entry's description. Full paths
    /// never equal a bare name, so scanned documents are always appended.
    Description,
}

/// Library settings, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryConfig {
    /// Directory holding the document bundles.
    pub root: PathBuf,
    pub match_policy: MatchPolicy,
    /// Height of generated thumbnails, in pixels.
    pub thumbnail_height: u32,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_LIBRARY_DIRNAME),
            match_policy: MatchPolicy::default(),
            thumbnail_height: DEFAULT_THUMBNAIL_HEIGHT,
        }
    }
}

impl LibraryConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
