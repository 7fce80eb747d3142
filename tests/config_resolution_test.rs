use std::io::Write;

use tempfile::NamedTempFile;
use termtest::utils::validation::Validate;
use termtest::{CliConfig, LineSettings};

fn cli_with_config(path: &str) -> CliConfig {
    CliConfig {
        port: None,
        baud: None,
        data_bits: None,
        stop_bits: None,
        parity: None,
        timeout_ms: None,
        config: Some(path.to_string()),
        verbose: false,
    }
}

#[test]
fn test_resolve_from_profile_file() {
    let mut profile = NamedTempFile::new().unwrap();
    profile
        .write_all(
            br#"
[port]
device = "/dev/ttyUSB3"
baud = 57600
parity = "none"
"#,
        )
        .unwrap();

    let cli = cli_with_config(profile.path().to_str().unwrap());
    let settings = LineSettings::resolve(&cli).unwrap();

    assert_eq!(settings.device, "/dev/ttyUSB3");
    assert_eq!(settings.baud, 57_600);
    assert_eq!(settings.parity, "none");
    // Unset profile fields fall back to the built-in defaults.
    assert_eq!(settings.data_bits, 8);
    assert_eq!(settings.stop_bits, 1);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_cli_flags_override_profile_file() {
    let mut profile = NamedTempFile::new().unwrap();
    profile
        .write_all(b"[port]\ndevice = \"COM15\"\nbaud = 115200\n")
        .unwrap();

    let mut cli = cli_with_config(profile.path().to_str().unwrap());
    cli.baud = Some(9_600);

    let settings = LineSettings::resolve(&cli).unwrap();
    assert_eq!(settings.device, "COM15");
    assert_eq!(settings.baud, 9_600);
}

#[test]
fn test_missing_profile_file_is_an_error() {
    let cli = cli_with_config("/nonexistent/termtest.toml");
    assert!(LineSettings::resolve(&cli).is_err());
}

#[test]
fn test_profile_without_device_fails_validation() {
    let mut profile = NamedTempFile::new().unwrap();
    profile.write_all(b"[port]\nbaud = 9600\n").unwrap();

    let cli = cli_with_config(profile.path().to_str().unwrap());
    let settings = LineSettings::resolve(&cli).unwrap();
    assert!(settings.validate().is_err());
}
