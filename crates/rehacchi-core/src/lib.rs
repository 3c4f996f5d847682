//! Rehacchi Core — shared error, configuration, and record types.

pub mod config;
pub mod error;
pub mod record;

pub use config::{BotConfig, SlackConfig};
pub use error::{Error, Result};
pub use record::{CanonicalRecord, SourceTag};
