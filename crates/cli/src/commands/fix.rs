//! `semifix fix`: replay exported diagnostics against a file on disk.
//!
//! This is the scripting surface of semifix. An editor integration feeds
//! diagnostics to the engine as they arrive; here the same engine runs one
//! explicit pass over a file, with the diagnostics read from a JSON export
//! in the LSP wire shape.

use anyhow::{Context, Result};
use colored::Colorize;
use semifix_engine::{EditorHost, FixSession, TriggerEvent};
use semifix_fixer::apply_edits;
use semifix_lsp::convert_lsp_diagnostic;
use semifix_types::{Diagnostic, DocumentUri, FixBatch};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::commands::common::CommandContext;
use crate::exit_code::ExitCode;
use crate::OutputFormat;

/// A single file standing in for an editor workspace.
///
/// The file is always the active document and the cursor is nowhere, so the
/// cursor heuristic never defers anything.
struct FileHost {
    uri: DocumentUri,
    language: String,
    text: Arc<str>,
    diagnostics: Vec<Diagnostic>,
}

impl EditorHost for FileHost {
    fn active_document(&self) -> Option<DocumentUri> {
        Some(self.uri.clone())
    }

    fn language_id(&self, uri: &DocumentUri) -> Option<String> {
        (uri == &self.uri).then(|| self.language.clone())
    }

    fn document_text(&self, uri: &DocumentUri) -> Option<Arc<str>> {
        (uri == &self.uri).then(|| Arc::clone(&self.text))
    }

    fn cursor_line(&self, _uri: &DocumentUri) -> Option<u32> {
        None
    }

    fn diagnostics(&self, uri: &DocumentUri) -> Vec<Diagnostic> {
        if uri == &self.uri {
            self.diagnostics.clone()
        } else {
            Vec::new()
        }
    }
}

pub fn run(
    file: &Path,
    diagnostics_path: &Path,
    dry_run: bool,
    language: Option<String>,
    config_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let context = CommandContext::load(config_path)?;
    let session = FixSession::new(context.config);

    let text =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let diagnostics = read_diagnostics(diagnostics_path)?;
    let language = if let Some(id) = language {
        id
    } else {
        language_from_extension(file)?
    };

    let host = FileHost {
        uri: file_uri(file),
        language: language.clone(),
        text: Arc::from(text.as_str()),
        diagnostics: diagnostics.clone(),
    };

    let Some(batch) = session.handle_event(&TriggerEvent::FixRequested, &host) else {
        if has_suppressed_fixes(&session, &language, &diagnostics) {
            report_suppressed(file, format);
            return Ok(ExitCode::FixesSuppressed);
        }
        report_clean(file, format);
        return Ok(ExitCode::Success);
    };

    if dry_run {
        display_dry_run(file, &batch, format);
    } else {
        let fixed = apply_edits(&text, &batch.edits);
        fs::write(file, &fixed)
            .with_context(|| format!("failed to write {}", file.display()))?;
        report_fixed(file, &batch, format);
    }

    Ok(ExitCode::Success)
}

/// Parse a JSON export of LSP diagnostics.
fn read_diagnostics(path: &Path) -> Result<Vec<Diagnostic>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read diagnostics from {}", path.display()))?;
    let exported: Vec<lsp_types::Diagnostic> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of LSP diagnostics", path.display()))?;
    Ok(exported.into_iter().map(convert_lsp_diagnostic).collect())
}

/// Default the language id from the file extension (`.java` means `java`).
fn language_from_extension(file: &Path) -> Result<String> {
    file.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_lowercase)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "cannot infer a language id for {}; pass --language",
                file.display()
            )
        })
}

/// The engine keys documents by URI; give the file a stable one.
fn file_uri(file: &Path) -> DocumentUri {
    let absolute = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    DocumentUri::new(format!("file://{}", absolute.display()))
}

/// True when tracked-source errors exist that no signature covers.
///
/// This is the all-or-nothing gate seen from the outside: the engine
/// returned no batch even though the compiler reported errors the fixer
/// tracks, so the file is too broken to autofix.
fn has_suppressed_fixes(session: &FixSession, language: &str, diagnostics: &[Diagnostic]) -> bool {
    let signatures = session.signatures();
    diagnostics.iter().any(|diagnostic| {
        diagnostic.is_error()
            && signatures.is_tracked_source(language, diagnostic)
            && signatures.classify(language, diagnostic).is_none()
    })
}

fn report_fixed(file: &Path, batch: &FixBatch, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            let count = batch.len();
            let noun = if count == 1 {
                "terminator"
            } else {
                "terminators"
            };
            println!(
                "{} {} {}",
                "✓".green(),
                file.display(),
                format!("({count} {noun} inserted)").dimmed()
            );
        }
        OutputFormat::Json => {
            for edit in &batch.edits {
                println!(
                    "{}",
                    serde_json::json!({
                        "action": "fixed",
                        "file": file.to_string_lossy(),
                        "line": edit.position.line,
                        "character": edit.position.character,
                        "inserted": edit.new_text,
                    })
                );
            }
        }
    }
}

fn display_dry_run(file: &Path, batch: &FixBatch, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!();
            println!("{}", "Dry run - would insert:".cyan());
            println!();
            println!("{}:", file.display().to_string().bold());
            for edit in &batch.edits {
                // Convert from 0-based to 1-based for display
                println!(
                    "  {}:{} {} {:?}",
                    edit.position.line + 1,
                    edit.position.character + 1,
                    "insert".green(),
                    edit.new_text
                );
            }
            println!();
        }
        OutputFormat::Json => {
            for edit in &batch.edits {
                println!(
                    "{}",
                    serde_json::json!({
                        "action": "would_fix",
                        "file": file.to_string_lossy(),
                        "line": edit.position.line,
                        "character": edit.position.character,
                        "inserted": edit.new_text,
                    })
                );
            }
        }
    }
}

fn report_clean(file: &Path, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!(
                "{} {} {}",
                "✓".green(),
                file.display(),
                "nothing to fix".dimmed()
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "action": "clean", "file": file.to_string_lossy() })
            );
        }
    }
}

fn report_suppressed(file: &Path, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!(
                "{} {} {}",
                "✗".red(),
                file.display(),
                "has syntax errors no signature covers; leaving it alone".yellow()
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "action": "suppressed", "file": file.to_string_lossy() })
            );
        }
    }
}
