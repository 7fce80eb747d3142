pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{CliConfig, LineSettings};
pub use crate::core::{MenuSession, SerialTransport, Transport};
pub use crate::utils::error::{Result, TermError};
