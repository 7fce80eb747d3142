use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::{Result, TermError};

/// TOML profile with defaults for the serial line, so a board's settings
/// can be kept next to its project instead of retyped per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub port: PortProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortProfile {
    pub device: Option<String>,
    pub baud: Option<u32>,
    pub data_bits: Option<u8>,
    pub stop_bits: Option<u8>,
    pub parity: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl ProfileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TermError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TermError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the environment variable's value.
    /// Unset variables are left as-is so the error points at the
    /// placeholder instead of an empty string.
    fn substitute_env_vars(content: &str) -> String {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_profile() {
        let toml_content = r#"
[port]
device = "/dev/ttyUSB0"
baud = 115200
data_bits = 8
stop_bits = 1
parity = "even"
"#;

        let config = ProfileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.port.device.as_deref(), Some("/dev/ttyUSB0"));
        assert_eq!(config.port.baud, Some(115_200));
        assert_eq!(config.port.parity.as_deref(), Some("even"));
        assert_eq!(config.port.timeout_ms, None);
    }

    #[test]
    fn test_partial_profile_is_accepted() {
        let config = ProfileConfig::from_toml_str("[port]\nbaud = 9600\n").unwrap();
        assert_eq!(config.port.baud, Some(9_600));
        assert_eq!(config.port.device, None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TERMTEST_TEST_DEVICE", "/dev/ttyACM7");

        let toml_content = r#"
[port]
device = "${TERMTEST_TEST_DEVICE}"
"#;

        let config = ProfileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.port.device.as_deref(), Some("/dev/ttyACM7"));

        std::env::remove_var("TERMTEST_TEST_DEVICE");
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let result = ProfileConfig::from_toml_str("[port\nbaud = ");
        assert!(matches!(
            result,
            Err(TermError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_profile_from_file() {
        use std::io::Write;
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[port]\ndevice = \"COM15\"\nparity = \"none\"\n")
            .unwrap();

        let config = ProfileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port.device.as_deref(), Some("COM15"));
        assert_eq!(config.port.parity.as_deref(), Some("none"));
    }
}
