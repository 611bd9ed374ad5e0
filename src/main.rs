//! folio CLI
//!
//! A card-in-frame personal portfolio for the terminal.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use folio::content::{self, LinkKey};
use folio::platform::{self, Launch};
use folio::report::{format_profile, OutputFormat};
use folio::tui;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "William Jefferson's portfolio, card-in-frame, in your terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the portfolio interactively (the default)
    Show,

    /// Print the full profile without entering the TUI
    Profile {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Open one of the portfolio's links from the shell
    Open {
        /// Which link to open
        #[arg(value_enum)]
        link: LinkArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LinkArg {
    Resume,
    Email,
    Elsewhere,
    Handshake,
    Linkedin,
}

impl From<LinkArg> for LinkKey {
    fn from(arg: LinkArg) -> Self {
        match arg {
            LinkArg::Resume => LinkKey::Resume,
            LinkArg::Email => LinkKey::Email,
            LinkArg::Elsewhere => LinkKey::Elsewhere,
            LinkArg::Handshake => LinkKey::Handshake,
            LinkArg::Linkedin => LinkKey::LinkedIn,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => tui::run().map_err(|e| e.to_string()),
        Commands::Profile { format } => cmd_profile(format.into()),
        Commands::Open { link } => cmd_open(link.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_profile(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_profile(format));
    Ok(())
}

fn cmd_open(key: LinkKey) -> Result<(), String> {
    let launch = Launch::from(content::link(key));
    println!("Opening {}", platform::describe(launch));
    platform::launch(launch).map_err(|e| e.to_string())
}
