use std::io::Write;
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::config::LineSettings;
use crate::utils::error::{Result, TermError};

/// Write-only byte sink for escape-sequence payloads. The harness never
/// reads from the port, so the seam is intentionally this narrow.
pub trait Transport {
    fn send(&mut self, data: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// The open serial handle. Owned from successful open until drop; drop
/// closes the descriptor.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    device: String,
}

impl SerialTransport {
    /// Open `settings.device` with the configured line parameters and
    /// flow control disabled.
    pub fn open(settings: &LineSettings) -> Result<Self> {
        let port = serialport::new(&settings.device, settings.baud)
            .data_bits(data_bits_from(settings.data_bits)?)
            .stop_bits(stop_bits_from(settings.stop_bits)?)
            .parity(parity_from(&settings.parity)?)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(settings.timeout_ms))
            .open()?;

        tracing::info!(
            "Opened {} at {} baud ({}{}{})",
            settings.device,
            settings.baud,
            settings.data_bits,
            settings.parity.chars().next().unwrap_or('n').to_ascii_uppercase(),
            settings.stop_bits
        );

        Ok(Self {
            port,
            device: settings.device.clone(),
        })
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), self.device);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.port.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.device
    }
}

fn data_bits_from(bits: u8) -> Result<DataBits> {
    match bits {
        5 => Ok(DataBits::Five),
        6 => Ok(DataBits::Six),
        7 => Ok(DataBits::Seven),
        8 => Ok(DataBits::Eight),
        other => Err(TermError::InvalidConfigValueError {
            field: "data_bits".to_string(),
            value: other.to_string(),
            reason: "Data bits must be 5, 6, 7 or 8".to_string(),
        }),
    }
}

fn stop_bits_from(bits: u8) -> Result<StopBits> {
    match bits {
        1 => Ok(StopBits::One),
        2 => Ok(StopBits::Two),
        other => Err(TermError::InvalidConfigValueError {
            field: "stop_bits".to_string(),
            value: other.to_string(),
            reason: "Stop bits must be 1 or 2".to_string(),
        }),
    }
}

fn parity_from(parity: &str) -> Result<Parity> {
    match parity.to_ascii_lowercase().as_str() {
        "none" => Ok(Parity::None),
        "even" => Ok(Parity::Even),
        "odd" => Ok(Parity::Odd),
        other => Err(TermError::InvalidConfigValueError {
            field: "parity".to_string(),
            value: other.to_string(),
            reason: "Parity must be none, even or odd".to_string(),
        }),
    }
}
