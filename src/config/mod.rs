use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "acvptool")]
#[command(about = "Front end for an ACVP test-vector session")]
pub struct CliConfig {
    #[arg(long, default_value = "config.json")]
    pub config: String,

    #[arg(long, help = "Run the interactive console instead of a one-shot dispatch")]
    pub interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON instead of the compact format")]
    pub log_json: bool,
}

/// On-disk tool configuration, loaded from a JSON file.
///
/// The interactive entry point treats this as an opaque value; only the
/// dispatch layer and the console inspect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub acvp_server: String,
    pub cert_pem_file: String,
    pub private_key_file: String,
    pub totp_secret_file: Option<String>,
    pub session_tokens_cache: Option<String>,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(Path::new(path))?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        validate_url("acvp_server", &self.acvp_server)?;
        validate_path("cert_pem_file", &self.cert_pem_file)?;
        validate_path("private_key_file", &self.private_key_file)?;

        if let Some(totp) = &self.totp_secret_file {
            validate_path("totp_secret_file", totp)?;
        }
        if let Some(cache) = &self.session_tokens_cache {
            validate_path("session_tokens_cache", cache)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            acvp_server: "https://demo.acvts.nist.gov".to_string(),
            cert_pem_file: "certs/client.pem".to_string(),
            private_key_file: "certs/client.key".to_string(),
            totp_secret_file: None,
            session_tokens_cache: None,
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_bad_server_url_fails_validation() {
        let mut config = sample_config();
        config.acvp_server = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_optional_path_fails_validation() {
        let mut config = sample_config();
        config.totp_secret_file = Some(String::new());
        assert!(config.validate().is_err());
    }
}
