use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcvpError {
    #[error("Capability not compiled into this binary: {capability}")]
    CapabilityNotCompiled { capability: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AcvpError {
    pub fn capability_not_compiled(capability: &str) -> Self {
        AcvpError::CapabilityNotCompiled {
            capability: capability.to_string(),
        }
    }

    /// Fatal errors are never retried or recovered by the dispatch layer.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AcvpError::CapabilityNotCompiled { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AcvpError::CapabilityNotCompiled { capability } => {
                format!("This binary was built without {} support", capability)
            }
            AcvpError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            AcvpError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AcvpError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required but missing", field)
            }
            AcvpError::IoError(e) => format!("File access failed: {}", e),
            AcvpError::SerializationError(e) => format!("Config file is not valid JSON: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AcvpError::CapabilityNotCompiled { capability } => format!(
                "Rebuild with `cargo build --features {}` to enable this mode",
                capability
            ),
            AcvpError::ConfigError { .. }
            | AcvpError::InvalidConfigValueError { .. }
            | AcvpError::MissingConfigError { .. } => {
                "Check the JSON config file passed via --config".to_string()
            }
            AcvpError::IoError(_) => {
                "Check that the config file exists and is readable".to_string()
            }
            AcvpError::SerializationError(_) => {
                "Validate the config file syntax with a JSON linter".to_string()
            }
        }
    }

    /// Exit code reported by the binary when this error reaches main.
    pub fn exit_code(&self) -> i32 {
        match self {
            AcvpError::CapabilityNotCompiled { .. } => 3,
            AcvpError::IoError(_) | AcvpError::SerializationError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AcvpError>;
