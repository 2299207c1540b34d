use photokeeper::library::Library;
use crate::errors::CliError;
use crate::ui::printer;
use crate::utils::find_entry;

/// 处理 'show' 命令
pub fn handle_show(library: &Library, name: &str) -> Result<(), CliError> {
    let entry = find_entry(library, name)?;
    printer::print_entry_details(&entry);
    println!("----------------------------------------");
    Ok(())
}
