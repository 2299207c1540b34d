use photokeeper::library::{Library, Mode};

/// 处理 'edit' 命令：切换浏览/编辑模式
pub fn handle_toggle(library: &mut Library) {
    let effects = library.toggle_mode();
    match library.mode() {
        Mode::Editing => println!("Editing mode. Rows can be deleted with 'rm'."),
        Mode::Viewing => println!("Viewing mode."),
    }
    println!("[{}]", effects.action_label);
}
