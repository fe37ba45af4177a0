use clap::{Parser, Subcommand};
use color_eyre::Result;
use std::path::PathBuf;
use std::process::ExitCode;

mod client;
mod commands;
mod constants;
mod domain;
mod list;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::constants::{API_URL_ENV, LOG_FILE_ENV};
use crate::state::{App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
 _     ___  ____  ____ _____ _____ ____
| |   / _ \| __ )/ ___|_   _| ____|  _ \
| |  | | | |  _ \\___ \ | | |  _| | |_) |
| |__| |_| | |_) |___) || | | |___|  _ <
|_____\___/|____/|____/ |_| |_____|_| \_\
";

/// Lobster Explorer - terminal viewer for LobsterToken transfers
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the transfers API
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Only show transfers sent by this address
    #[arg(long, global = true)]
    sender: Option<String>,

    /// Only show transfers received by this address
    #[arg(long, global = true)]
    recipient: Option<String>,

    /// Write logs to this file (level from RUST_LOG)
    #[arg(long, global = true, env = LOG_FILE_ENV)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch transfers once and print them as a table
    List,
    /// Show the settings file, or write the current settings to it
    Config {
        /// Persist the resolved API base and timeout
        #[arg(long)]
        save: bool,
    },
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = AppConfig::load();
    let options = StartupOptions {
        api: config.resolve_api(cli.api_url.as_deref()),
        http: config.http_config(),
        sender: cli.sender,
        recipient: cli.recipient,
    };
    tracing::info!(api = options.api.base_url(), "starting");

    match cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("Lobster Explorer v{VERSION}");
            println!("A terminal UI for LobsterToken transfers on Holesky");
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::List) => list::run(options).await,
        Some(Commands::Config { save }) => {
            let path = AppConfig::config_path()?;
            if save {
                config.with_api_base(&options.api).save()?;
                println!("Saved settings to {}", path.display());
            } else {
                println!("# {}", path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            run_tui(options)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_tui(options: StartupOptions) -> Result<()> {
    let mut app = App::new(options)?;
    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}
