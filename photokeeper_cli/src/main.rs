mod cli;
pub mod errors;
mod handlers;
mod repl;
mod ui;
mod utils;

use crate::cli::{Cli, TopLevelCommands};
use crate::errors::CliError;
use crate::repl::run_repl;
use crate::repl::state::AppState;
use clap::Parser;
use log::debug;
use photokeeper::common::constants::DEFAULT_LIBRARY_DIRNAME;
use photokeeper::library::{Library, LibraryConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let library = match cli.command {
        TopLevelCommands::Open { path, config } => handle_open_command(path, config)?,
    };

    println!(
        "Library at {:?} is now open with {} document(s). Entering interactive mode.",
        library.root(),
        library.len()
    );
    println!("Type 'help' for commands or 'exit' to quit.");
    let mut app_state = AppState {
        active_library: Some(library),
    };
    run_repl(&mut app_state)
}

fn handle_open_command(
    path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<Library, CliError> {
    // 1. 读取配置；命令行中的根目录优先
    let mut config = match config_path {
        Some(config_path) => LibraryConfig::load(&config_path)?,
        None => LibraryConfig::with_root(env::current_dir()?.join(DEFAULT_LIBRARY_DIRNAME)),
    };
    if let Some(path) = path {
        config.root = path;
    }
    debug!("Using configuration: {:?}", config);
    println!("Opening library at: {:?}", config.root);

    // 2. 打开并扫描
    let mut library = Library::open(&config)?;
    let report = library.load_local()?;
    ui::printer::print_load_report(&report);
    Ok(library)
}
