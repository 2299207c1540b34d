pub mod dispatcher;
pub mod state;

use crate::cli::ReplCommand;
use crate::errors::CliError;
use crate::repl::dispatcher::handle_repl_command;
use crate::repl::state::AppState;
use clap::Parser;
use photokeeper::library::Mode;
use photokeeper::utils::path::file_name_string;
use rustyline::DefaultEditor;

pub fn run_repl(app_state: &mut AppState) -> Result<(), CliError> {
    let mut rl = DefaultEditor::new()?;

    while let Some(library) = &app_state.active_library {
        let library_name = file_name_string(library.root());
        let prompt = match library.mode() {
            Mode::Viewing => format!("photokeeper[{}]> ", library_name),
            Mode::Editing => format!("photokeeper[{}] (editing)> ", library_name),
        };

        let readline = rl.readline(&prompt);
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let args = shlex::split(line.as_str()).unwrap_or_default();
                if args.is_empty() {
                    continue;
                }

                match ReplCommand::try_parse_from(args) {
                    Ok(command) => {
                        if let Err(e) = handle_repl_command(command, app_state) {
                            eprintln!("Error: {}", e);
                        }
                    }
                    Err(e) => {
                        e.print()?;
                    }
                }
            }
            Err(_) => {
                if app_state.active_library.take().is_some() {
                    println!("\nClosing library. Goodbye!");
                }
                break;
            }
        }
    }
    Ok(())
}
