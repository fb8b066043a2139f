use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Cursor position {position} is outside the collection (length {len})")]
    OutOfRange { position: isize, len: usize },

    #[error("Unknown memento class {name}")]
    IncompatibleCapsule { name: String },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PatternError {
    pub fn out_of_range(position: isize, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    pub fn incompatible_capsule(name: impl Into<String>) -> Self {
        Self::IncompatibleCapsule { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
