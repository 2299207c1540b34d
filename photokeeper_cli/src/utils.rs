use photokeeper::library::{Entry, Library};
use crate::errors::CliError;

/// 按名称查找条目，返回其副本以便后续对文档库做可变操作
pub fn find_entry(library: &Library, name: &str) -> Result<Entry, CliError> {
    library
        .find(name)
        .cloned()
        .ok_or_else(|| CliError::EntryNotFound(name.to_string()))
}
