use photokeeper::library::Library;
use crate::ui::printer;

/// 处理 'ls' 命令
pub fn handle_list(library: &Library, detail: bool) {
    printer::print_entry_list(library.entries(), detail);
}
