use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "persistence-profile",
    version,
    about = "Select the persistence profile to activate at startup"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Settings file to read instead of the default location")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve and print the profiles to activate
    Resolve(ResolveArgs),
    /// Show the platform context and its service bindings
    Bindings,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(
        long = "profile",
        value_delimiter = ',',
        action = ArgAction::Append,
        help = "Active profile (repeatable, comma separated)"
    )]
    pub profiles: Vec<String>,
}
