mod commands;
mod exit_code;

use clap::{Parser, Subcommand};
use colored::Colorize;
use exit_code::ExitCode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "semifix")]
#[command(about = "Insert missing statement terminators flagged by compiler diagnostics", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a semifix config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fix a source file from an exported diagnostics array
    ///
    /// Reads the diagnostics a compiler or language server reported for FILE
    /// and inserts the terminators they ask for. The fix is all-or-nothing:
    /// if the file has syntax errors no signature covers, nothing is changed
    /// and the exit code is 2.
    Fix {
        /// The source file to fix
        file: PathBuf,

        /// JSON file holding an array of LSP-shaped diagnostics for FILE
        #[arg(short, long, value_name = "FILE")]
        diagnostics: PathBuf,

        /// Show the edits without modifying the file
        #[arg(long)]
        dry_run: bool,

        /// Language id of FILE (defaults from the file extension)
        #[arg(short, long)]
        language: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the diagnostic signatures the fixer reacts to
    Signatures {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// Line-oriented JSON for tooling
    Json,
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let result = match cli.command {
        Commands::Fix {
            file,
            diagnostics,
            dry_run,
            language,
            format,
        } => commands::fix::run(&file, &diagnostics, dry_run, language, cli.config, format),
        Commands::Signatures { format } => commands::signatures::run(cli.config, format),
    };

    match result {
        Ok(code) => {
            if code != ExitCode::Success {
                tracing::debug!("Exiting with {code}");
                code.exit();
            }
        }
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::InputError.exit();
        }
    }
}

/// Initialize tracing from the `SEMIFIX_LOG` environment variable.
///
/// Logging is off unless asked for, and always goes to stderr so it can
/// never mix with JSON output on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("SEMIFIX_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag or the `NO_COLOR` environment variable (colors off)
/// 3. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 4. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 5. Default: colors enabled if stdout is a TTY (handled by `colored`)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color || std::env::var_os("NO_COLOR").is_some() {
        // NO_COLOR: presence alone disables colors, regardless of value
        control::set_override(false);
    } else if let Ok(force) = std::env::var("CLICOLOR_FORCE") {
        if !force.is_empty() && force != "0" {
            control::set_override(true);
        }
    } else if std::env::var("CLICOLOR").is_ok_and(|value| value == "0") {
        control::set_override(false);
    }
    // Otherwise let the colored crate decide based on TTY detection
}
