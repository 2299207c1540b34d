use crate::cli::ReplCommand;
use crate::errors::CliError;
use crate::handlers;
use crate::repl::state::AppState;

/// REPL 命令处理器
pub fn handle_repl_command(command: ReplCommand, app_state: &mut AppState) -> Result<(), CliError> {
    // Exit 会使 active_library 变为 None，从而终止 run_repl 中的循环。
    let Some(library) = app_state.active_library.as_mut() else {
        return Ok(());
    };

    match command {
        ReplCommand::List { detail } => {
            handlers::list::handle_list(library, detail);
        }
        ReplCommand::Add { image, title } => {
            handlers::add::handle_add(library, image.as_deref(), title.as_deref())?;
        }
        ReplCommand::Show { name } => {
            handlers::show::handle_show(library, &name)?;
        }
        ReplCommand::Edit => {
            handlers::mode::handle_toggle(library);
        }
        ReplCommand::Delete { name } => {
            handlers::remove::handle_delete(library, &name)?;
        }
        ReplCommand::Rename { name, new_name } => {
            handlers::rename::handle_rename(library, &name, &new_name)?;
        }
        ReplCommand::Update { name, image, title } => {
            handlers::update::handle_update(library, &name, image.as_deref(), title)?;
        }
        ReplCommand::Note { name, title, note } => {
            handlers::note::handle_note(library, &name, title, note)?;
        }
        ReplCommand::Refresh => {
            let report = library.refresh()?;
            crate::ui::printer::print_load_report(&report);
            println!("{} document(s) listed.", library.len());
        }
        ReplCommand::Exit => {
            app_state.active_library = None;
            println!("Goodbye!");
        }
    }
    Ok(())
}
