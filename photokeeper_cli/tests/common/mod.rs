//!
//! # Test Common Utilities
//!
//! Helpers for running the `photokeeper` binary against a throwaway library.
//!
//
// // # 测试通用工具
// //
// // 为 `photokeeper` 集成测试提供临时文档库与命令运行的辅助函数。
// //
#![allow(dead_code)]

use assert_cmd::Command;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Represents the context for a single test: a temporary directory holding a
/// library root. The directory is removed when the context is dropped.
pub struct TestContext {
    /// Held for its Drop behavior to ensure cleanup.
    pub _temp_dir: TempDir,
    /// The library root inside the temporary directory.
    pub library_path: PathBuf,
}

impl TestContext {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let library_path = temp_dir.path().join("library");
        Ok(TestContext {
            _temp_dir: temp_dir,
            library_path,
        })
    }

    /// Builds an `open` command for the library, ready for REPL input on stdin.
    pub fn open_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_photokeeper"));
        cmd.arg("open").arg(&self.library_path);
        cmd
    }

    /// Writes a solid-color PNG next to the library and returns its path.
    pub fn create_image(&self, name: &str, width: u32, height: u32) -> anyhow::Result<PathBuf> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 40, 40])));
        let path = self._temp_dir.path().join(name);
        img.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }

    /// Writes a JSON configuration file and returns its path.
    pub fn write_config(&self, json: &str) -> anyhow::Result<PathBuf> {
        let path = self._temp_dir.path().join("config.json");
        fs::write(&path, json)?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        self._temp_dir.path()
    }
}

/// 把路径转成可以放进 REPL 命令行的带引号字符串
pub fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.to_string_lossy().replace('\\', "/"))
}
