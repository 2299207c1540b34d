use photokeeper::library::Library;
use crate::errors::CliError;
use crate::utils::find_entry;

/// 处理 'rm' 命令
pub fn handle_delete(library: &mut Library, name: &str) -> Result<(), CliError> {
    // 只有编辑模式下才允许删除行
    if !library.mode().effects().rows_deletable {
        return Err(CliError::NotEditing);
    }

    let entry = find_entry(library, name)?;
    if library.delete(&entry) {
        println!("'{}' removed from the list.", entry.description());
        println!(
            "Note: the bundle at {:?} stays on disk and will reappear on the next refresh.",
            entry.file_path
        );
    }
    Ok(())
}
