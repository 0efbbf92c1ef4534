use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use matask::{session, ColumnKey, EchoPolicy, ElementKind, Request, SessionConfig};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Interactive console utility running a fixed menu of matrix tasks")]
struct Cli {
    /// Element type of entered matrices
    #[arg(long, value_enum, default_value_t = ElementKind::I32)]
    element: ElementKind,

    /// Extreme element used to order columns in task 4
    #[arg(long, value_enum, default_value_t = ColumnKey::Max)]
    column_key: ColumnKey,

    /// When to echo an entered matrix back to stderr
    #[arg(long, value_enum, default_value_t = EchoPolicy::Always)]
    echo: EchoPolicy,

    /// Disable colored prompts and messages
    #[arg(long)]
    no_color: bool,

    /// Sets the level of verbosity
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && io::stderr().is_terminal();
    let config = SessionConfig::default()
        .with_color(color)
        .with_echo(cli.echo)
        .with_column_key(cli.column_key)
        .with_element(cli.element);

    let mut request = Request::stdio(&config);
    session::run(&mut request, &mut io::stdout().lock(), &config)
        .context("interactive session failed")
}
