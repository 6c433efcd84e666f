//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The recorded forecast state and the recorder operation
//! - Configuration (user defaults) handling
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod recorder;
pub mod state;

pub use config::Config;
pub use error::ConfigError;
pub use recorder::forecast;
pub use state::{CONDITION_SEPARATOR, ForecastState, format_forecast};
