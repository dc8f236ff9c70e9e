mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    cursor, init, modules, paste, render, CursorArgs, InitArgs, ModulesArgs, PasteArgs, RenderArgs,
};
use config::{default_log_filter, Config};
use tracing_subscriber::EnvFilter;

/// Pagecraft CLI - inspect, render and edit page documents
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagecraft project
    Init(InitArgs),

    /// List the modules a page uses
    Modules(ModulesArgs),

    /// Render a page to its element tree
    Render(RenderArgs),

    /// Parse clipboard text into a component
    Paste(PasteArgs),

    /// Translate caret positions in page markup
    Cursor(CursorArgs),
}

/// `RUST_LOG` wins over the configured filter
fn init_tracing(config_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter))
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match std::env::current_dir() {
        Ok(cwd) => run(cli, &cwd.display().to_string()).await,
        Err(e) => Err(anyhow::anyhow!("Cannot get current directory: {}", e)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

async fn run(cli: Cli, cwd: &str) -> anyhow::Result<()> {
    // A broken config still gets logging; commands that need it report the error
    let log_filter = Config::load(cwd)
        .map(|config| config.log_filter)
        .unwrap_or_else(|_| default_log_filter());
    init_tracing(&log_filter);

    match cli.command {
        Command::Init(args) => init(args, cwd),
        Command::Modules(args) => modules(args, cwd),
        Command::Render(args) => render(args, cwd).await,
        Command::Paste(args) => paste(args, cwd),
        Command::Cursor(args) => cursor(args, cwd),
    }
}
