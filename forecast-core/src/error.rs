use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine platform config directory")]
    NoConfigDir,

    #[error("Failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration to TOML")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to create config directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
