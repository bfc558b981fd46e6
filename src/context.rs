use std::path::PathBuf;

use crate::config::{self, Settings};
use crate::error::AppResult;
use crate::logging;
use crate::output::Output;
use crate::platform::{CloudFoundryProvider, ProcessEnv};
use crate::profile::ProfileResolver;

#[derive(Debug)]
pub struct AppContext {
    pub settings: Settings,
    pub env: ProcessEnv,
    pub platform: CloudFoundryProvider<ProcessEnv>,
    pub resolver: ProfileResolver,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config: Option<PathBuf>, json: bool, verbose: u8) -> AppResult<Self> {
        let settings = config::load_settings(config.as_deref())?;
        logging::init(verbose, settings.log_level.as_deref());

        Ok(Self {
            settings,
            env: ProcessEnv,
            platform: CloudFoundryProvider::from_process(),
            resolver: ProfileResolver::default(),
            output: Output::new(json),
        })
    }
}
