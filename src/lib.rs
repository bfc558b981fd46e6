pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod platform;
pub mod profile;

use cli::Cli;
use error::AppResult;

pub use error::AppError;
pub use platform::{CloudContext, PlatformProvider, ServiceBinding, ServiceKind};
pub use profile::{ActiveProfiles, HostEnvironment, ProfileResolver, Resolution};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
