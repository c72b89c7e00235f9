use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LiveError>;

#[derive(Error, Debug)]
pub enum LiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed frame: {source}")]
    Frame {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed landmarks: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid hand: {0}")]
    Input(#[from] hand_pose::InvalidInput),

    #[error("landmark source unavailable: {0}")]
    Source(String),
}
