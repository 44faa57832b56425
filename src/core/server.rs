use crate::config::Config;
use crate::utils::error::{AcvpError, Result};
use url::Url;

/// Handle for one ACVP server session.
///
/// Opaque to the interactive entry point: the fallback build never inspects
/// it, and the console only reads its display fields. Establishing the actual
/// protocol session is outside this tool.
#[derive(Debug, Clone)]
pub struct Server {
    base_url: Url,
    cert_pem_file: String,
    private_key_file: String,
}

impl Server {
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url =
            Url::parse(&config.acvp_server).map_err(|e| AcvpError::InvalidConfigValueError {
                field: "acvp_server".to_string(),
                value: config.acvp_server.clone(),
                reason: format!("Invalid URL format: {}", e),
            })?;

        Ok(Self {
            base_url,
            cert_pem_file: config.cert_pem_file.clone(),
            private_key_file: config.private_key_file.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cert_pem_file(&self) -> &str {
        &self.cert_pem_file
    }

    pub fn private_key_file(&self) -> &str {
        &self.private_key_file
    }
}
