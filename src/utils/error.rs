use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermError {
    #[error("Serial port error: {0}")]
    SerialError(#[from] serialport::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl TermError {
    /// A hint the CLI prints alongside the error so the operator knows
    /// what to try next.
    pub fn recovery_suggestion(&self) -> String {
        match self {
            TermError::SerialError(_) => {
                "Check that the device exists, is not held open by another \
                 program, and that you have permission to access it"
                    .to_string()
            }
            TermError::IoError(_) => "Check console input/output and retry".to_string(),
            TermError::ConfigValidationError { field, .. }
            | TermError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
            TermError::MissingConfigError { field } => {
                format!(
                    "Provide '{}' on the command line or in a --config profile",
                    field
                )
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TermError>;
