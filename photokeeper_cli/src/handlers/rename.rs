use photokeeper::library::Library;
use photokeeper::utils::path::display_name;
use crate::errors::CliError;
use crate::utils::find_entry;

/// 处理文档重命名命令
pub fn handle_rename(library: &mut Library, name: &str, new_name: &str) -> Result<(), CliError> {
    // 1. 查找要重命名的文档
    let entry = find_entry(library, name)?;
    println!("Renaming '{}' to '{}'...", entry.description(), new_name);

    // 2. 移动文档包
    let new_path = library.rename(&entry, new_name)?;
    println!("Document is now '{}'.", display_name(&new_path));
    Ok(())
}
