use photokeeper::document::TextData;
use photokeeper::library::Library;
use crate::errors::CliError;
use crate::utils::find_entry;

/// 处理 'note' 命令：标题与备注总是一起写入
pub fn handle_note(
    library: &mut Library,
    name: &str,
    title: String,
    note: String,
) -> Result<(), CliError> {
    let entry = find_entry(library, name)?;
    library.update_text(&entry, TextData::new(Some(title), Some(note)))?;
    println!("Text of '{}' updated.", entry.description());
    Ok(())
}
