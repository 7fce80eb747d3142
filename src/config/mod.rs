pub mod profile;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::profile::ProfileConfig;
use crate::utils::error::{Result, TermError};
use crate::utils::validation::{self, Validate};

pub const DEFAULT_BAUD: u32 = 115_200;
pub const DEFAULT_DATA_BITS: u8 = 8;
pub const DEFAULT_STOP_BITS: u8 = 1;
pub const DEFAULT_PARITY: &str = "even";
pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "termtest")]
#[command(about = "Manual UART test harness for ANSI/VT100 terminal rendering")]
pub struct CliConfig {
    /// Serial device to open, e.g. /dev/ttyUSB0 or COM15
    #[arg(long)]
    pub port: Option<String>,

    #[arg(long)]
    pub baud: Option<u32>,

    #[arg(long)]
    pub data_bits: Option<u8>,

    #[arg(long)]
    pub stop_bits: Option<u8>,

    /// Parity: none, even or odd
    #[arg(long)]
    pub parity: Option<String>,

    /// Write timeout applied at open time
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// TOML profile file providing defaults for the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// The resolved line configuration the transport opens with. CLI flags win
/// over profile values, profile values win over the built-in defaults
/// (115200 8E1, mirroring the hardware this harness was written against).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSettings {
    pub device: String,
    pub baud: u32,
    pub data_bits: u8,
    pub stop_bits: u8,
    pub parity: String,
    pub timeout_ms: u64,
}

impl LineSettings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let profile = match &cli.config {
            Some(path) => Some(ProfileConfig::from_file(path)?),
            None => None,
        };
        Ok(Self::merge(cli, profile.as_ref()))
    }

    fn merge(cli: &CliConfig, profile: Option<&ProfileConfig>) -> Self {
        let port = profile.map(|p| &p.port);
        Self {
            device: cli
                .port
                .clone()
                .or_else(|| port.and_then(|p| p.device.clone()))
                .unwrap_or_default(),
            baud: cli
                .baud
                .or_else(|| port.and_then(|p| p.baud))
                .unwrap_or(DEFAULT_BAUD),
            data_bits: cli
                .data_bits
                .or_else(|| port.and_then(|p| p.data_bits))
                .unwrap_or(DEFAULT_DATA_BITS),
            stop_bits: cli
                .stop_bits
                .or_else(|| port.and_then(|p| p.stop_bits))
                .unwrap_or(DEFAULT_STOP_BITS),
            parity: cli
                .parity
                .clone()
                .or_else(|| port.and_then(|p| p.parity.clone()))
                .unwrap_or_else(|| DEFAULT_PARITY.to_string()),
            timeout_ms: cli
                .timeout_ms
                .or_else(|| port.and_then(|p| p.timeout_ms))
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Validate for LineSettings {
    fn validate(&self) -> Result<()> {
        if self.device.is_empty() {
            return Err(TermError::MissingConfigError {
                field: "port".to_string(),
            });
        }
        validation::validate_device_path("port", &self.device)?;
        validation::validate_range("baud", self.baud, 300, 4_000_000)?;
        validation::validate_range("data_bits", self.data_bits, 5, 8)?;
        validation::validate_range("stop_bits", self.stop_bits, 1, 2)?;
        validation::validate_one_of("parity", &self.parity.to_ascii_lowercase(), &["none", "even", "odd"])?;
        validation::validate_range("timeout_ms", self.timeout_ms, 1, 60_000)?;
        Ok(())
    }
}
