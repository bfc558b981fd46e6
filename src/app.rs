use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(config, json, verbose)?;

    match command {
        Command::Resolve(args) => commands::resolve::run(&ctx, args),
        Command::Bindings => commands::bindings::run(&ctx),
    }
}
