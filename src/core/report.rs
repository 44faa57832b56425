use crate::config::Config;
use crate::core::interactive::INTERACTIVE_MODE_SUPPORTED;
use crate::core::server::Server;
use crate::utils::error::Result;
use serde::Serialize;

/// One-shot summary printed when no operation mode is requested: which
/// capabilities this binary was built with, and where the session would go.
#[derive(Debug, Serialize)]
pub struct CapabilityReport {
    pub interactive_mode_supported: bool,
    pub acvp_server: String,
    pub cert_pem_file: String,
    pub private_key_file: String,
    pub totp_secret_configured: bool,
}

impl CapabilityReport {
    pub fn new(server: &Server, config: &Config) -> Self {
        Self {
            interactive_mode_supported: INTERACTIVE_MODE_SUPPORTED,
            acvp_server: server.base_url().to_string(),
            cert_pem_file: server.cert_pem_file().to_string(),
            private_key_file: server.private_key_file().to_string(),
            totp_secret_configured: config.totp_secret_file.is_some(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
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
            totp_secret_file: Some("certs/totp.secret".to_string()),
            session_tokens_cache: None,
        }
    }

    #[test]
    fn test_report_tracks_build_capability() {
        let config = sample_config();
        let server = Server::from_config(&config).unwrap();
        let report = CapabilityReport::new(&server, &config);

        assert_eq!(report.interactive_mode_supported, INTERACTIVE_MODE_SUPPORTED);
        assert!(report.totp_secret_configured);

        let json = report.to_json().unwrap();
        assert!(json.contains("interactive_mode_supported"));
        assert!(json.contains("demo.acvts.nist.gov"));
    }
}
