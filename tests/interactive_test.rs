#![cfg(feature = "interactive")]

use acvp_tool::{CapabilityReport, Config, Server, INTERACTIVE_MODE_SUPPORTED};

#[test]
fn test_flag_reports_supported() {
    assert!(INTERACTIVE_MODE_SUPPORTED);
}

#[test]
fn test_capability_report_reflects_interactive_build() {
    let config = Config {
        acvp_server: "https://demo.acvts.nist.gov".to_string(),
        cert_pem_file: "certs/client.pem".to_string(),
        private_key_file: "certs/client.key".to_string(),
        totp_secret_file: None,
        session_tokens_cache: None,
    };
    let server = Server::from_config(&config).unwrap();

    let report = CapabilityReport::new(&server, &config);
    assert!(report.interactive_mode_supported);
}
