use acvp_tool::utils::logger;
use acvp_tool::{CapabilityReport, CliConfig, Config, Server, INTERACTIVE_MODE_SUPPORTED};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting acvptool");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match Config::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let server = match Server::from_config(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("❌ Failed to build server handle: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if cli.interactive {
        // Check the capability flag before invoking the entry point, so the
        // fallback build reports the problem without tripping the fatal path.
        if !INTERACTIVE_MODE_SUPPORTED {
            let e = acvp_tool::AcvpError::capability_not_compiled("interactive");
            tracing::error!("❌ Interactive mode requested but not available: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }

        if let Err(e) = acvp_tool::run_interactive(&server, &config).await {
            tracing::error!("❌ Interactive session failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }

        return Ok(());
    }

    // No operation requested: report what this binary can do and where the
    // session would go.
    let report = CapabilityReport::new(&server, &config);
    println!("{}", report.to_json()?);

    if !INTERACTIVE_MODE_SUPPORTED {
        tracing::info!("💡 Rebuild with --features interactive to enable the console");
    }

    Ok(())
}
