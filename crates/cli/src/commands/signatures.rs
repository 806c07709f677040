//! `semifix signatures`: show the diagnostic signatures in effect.
//!
//! Useful for checking what a config file actually contributed before
//! wiring it into an editor.

use anyhow::Result;
use colored::Colorize;
use semifix_engine::FixSession;
use std::path::PathBuf;

use crate::commands::common::CommandContext;
use crate::exit_code::ExitCode;
use crate::OutputFormat;

pub fn run(config_path: Option<PathBuf>, format: OutputFormat) -> Result<ExitCode> {
    let CommandContext { config, source } = CommandContext::load(config_path)?;
    let session = FixSession::new(config);
    let signatures = session.signatures();

    match format {
        OutputFormat::Human => {
            println!();
            if let Some(path) = &source {
                println!(
                    "{} {}",
                    "Active signatures".bold(),
                    format!("(config: {})", path.display()).dimmed()
                );
            } else {
                println!(
                    "{} {}",
                    "Active signatures".bold(),
                    "(built-in defaults)".dimmed()
                );
            }
            println!();

            for signature in signatures.iter() {
                println!(
                    "  {} {} {}",
                    signature.language_id.as_str().cyan().bold(),
                    format!("insert {:?}", signature.terminator).green(),
                    format!("source: {}", signature.source).dimmed()
                );
                println!(
                    "    {}",
                    format!("prefix: {:?}", signature.message_prefix).dimmed()
                );
            }

            println!();
            let count = signatures.len();
            let noun = if count == 1 { "signature" } else { "signatures" };
            println!("{count} {noun}");
        }
        OutputFormat::Json => {
            for signature in signatures.iter() {
                println!(
                    "{}",
                    serde_json::json!({
                        "language": signature.language_id,
                        "source": signature.source,
                        "messagePrefix": signature.message_prefix,
                        "terminator": signature.terminator.to_string(),
                    })
                );
            }
        }
    }

    Ok(ExitCode::Success)
}
