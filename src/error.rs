use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "only one service of the following types may be bound to this application: [{}]. these services are bound to the application: [{}]",
        .allowed.join(", "),
        .bound.join(", ")
    )]
    AmbiguousBinding {
        allowed: Vec<String>,
        bound: Vec<String>,
    },
    #[error(
        "only one active profile may be set among the following: [{}]. these profiles are active: [{}]",
        .allowed.join(", "),
        .active.join(", ")
    )]
    AmbiguousLocalProfile {
        allowed: Vec<String>,
        active: Vec<String>,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
