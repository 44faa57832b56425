//! Interactive-mode entry point, selected at build time.
//!
//! Exactly one of the two implementations below is compiled into a given
//! binary, and `INTERACTIVE_MODE_SUPPORTED` always agrees with which one it
//! is. Callers are expected to check the flag before invoking
//! `run_interactive`; a binary built without the `interactive` feature fails
//! the call with `AcvpError::CapabilityNotCompiled` for every input.

#[cfg(feature = "interactive")]
use crate::config::Config;
#[cfg(feature = "interactive")]
use crate::core::server::Server;
#[cfg(feature = "interactive")]
use crate::utils::error::Result;
#[cfg(feature = "interactive")]
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[cfg(feature = "interactive")]
pub const INTERACTIVE_MODE_SUPPORTED: bool = true;

#[cfg(feature = "interactive")]
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Server,
    Config,
    Quit,
    Empty,
    Unknown(String),
}

#[cfg(feature = "interactive")]
impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Command::Empty,
            "help" | "?" => Command::Help,
            "server" => Command::Server,
            "config" => Command::Config,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Line-based console over the session handle. Reads commands from stdin
/// until `quit` or EOF. Does not touch the network; establishing the protocol
/// session is outside this tool.
#[cfg(feature = "interactive")]
pub async fn run_interactive(server: &Server, config: &Config) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    tracing::info!("Interactive console started (type 'help' for commands)");

    loop {
        stdout.write_all(b"acvptool> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Command::Help => {
                stdout
                    .write_all(
                        b"Commands:\n  help    show this message\n  server  show the session target\n  config  dump the loaded configuration\n  quit    leave the console\n",
                    )
                    .await?;
            }
            Command::Server => {
                let summary = format!(
                    "server: {}\ncert:   {}\nkey:    {}\n",
                    server.base_url(),
                    server.cert_pem_file(),
                    server.private_key_file()
                );
                stdout.write_all(summary.as_bytes()).await?;
            }
            Command::Config => {
                let dump = serde_json::to_string_pretty(config)?;
                stdout.write_all(dump.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            Command::Quit => break,
            Command::Empty => continue,
            Command::Unknown(cmd) => {
                let msg = format!("Unknown command: {} (try 'help')\n", cmd);
                stdout.write_all(msg.as_bytes()).await?;
            }
        }
    }

    tracing::info!("Interactive console closed");
    Ok(())
}

// Fallback for builds without the interactive feature.
#[cfg(not(feature = "interactive"))]
pub const INTERACTIVE_MODE_SUPPORTED: bool = false;

/// Placeholder with the same signature as the real implementation, so the
/// dispatch layer compiles without feature-specific branching. Never returns
/// `Ok`; both parameters are ignored.
#[cfg(not(feature = "interactive"))]
pub async fn run_interactive(
    _server: &crate::core::server::Server,
    _config: &crate::config::Config,
) -> crate::utils::error::Result<()> {
    Err(crate::utils::error::AcvpError::capability_not_compiled(
        "interactive",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "interactive")]
    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("  ?  "), Command::Help);
        assert_eq!(Command::parse("server"), Command::Server);
        assert_eq!(Command::parse("config"), Command::Config);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(
            Command::parse("fetch"),
            Command::Unknown("fetch".to_string())
        );
    }

    #[cfg(feature = "interactive")]
    #[test]
    fn test_flag_reports_supported() {
        assert!(INTERACTIVE_MODE_SUPPORTED);
    }

    #[cfg(not(feature = "interactive"))]
    #[test]
    fn test_flag_reports_unsupported() {
        assert!(!INTERACTIVE_MODE_SUPPORTED);
    }
}
