//! The autofix session: configuration plus event handling.

use semifix_config::{AutofixConfig, SignatureConfig};
use semifix_fixer::{decide, DecisionInput, SignatureSet, TargetSignature};
use semifix_types::{DocumentUri, FixBatch};

use crate::events::TriggerEvent;
use crate::host::EditorHost;

/// One autofix session for one editor.
///
/// The session is stateless between events: each [`handle_event`] call
/// reads a fresh snapshot from the host, runs the decision pipeline, and
/// returns at most one batch. Stale state therefore cannot outlive the
/// event that produced it.
///
/// [`handle_event`]: Self::handle_event
pub struct FixSession {
    config: AutofixConfig,
    signatures: SignatureSet,
}

impl FixSession {
    /// Create a session from a configuration.
    ///
    /// The signature table is the built-in entries followed by the
    /// configuration's extras, resolved once here so event handling never
    /// re-parses config.
    #[must_use]
    pub fn new(config: AutofixConfig) -> Self {
        let signatures = SignatureSet::with_extra(config.signatures.iter().map(to_signature));
        Self { config, signatures }
    }

    /// Replace the configuration, rebuilding the signature table.
    ///
    /// Callers watching config changes should also re-run
    /// [`Subscriptions::sync`](crate::Subscriptions::sync) so event
    /// registrations follow the new flags.
    pub fn reconfigure(&mut self, config: AutofixConfig) {
        tracing::debug!(
            fix_on_error = config.fix_on_error,
            fix_on_save = config.fix_on_save,
            avoid_cursor = config.avoid_cursor,
            extra_signatures = config.signatures.len(),
            "Reconfiguring session"
        );
        *self = Self::new(config);
    }

    /// The effective configuration.
    #[must_use]
    pub const fn config(&self) -> &AutofixConfig {
        &self.config
    }

    /// The resolved signature table.
    #[must_use]
    pub const fn signatures(&self) -> &SignatureSet {
        &self.signatures
    }

    /// Handle one trigger event against the host's current state.
    ///
    /// Gating by event:
    /// - [`TriggerEvent::DiagnosticsChanged`] requires `fixOnError`, only
    ///   acts when the active document is among the updated ones, and
    ///   honors the `avoidCursor` guard;
    /// - [`TriggerEvent::WillSave`] requires `fixOnSave` and evaluates the
    ///   saving document with the cursor guard off, since the user asked
    ///   to persist the buffer as-is-but-valid;
    /// - [`TriggerEvent::FixRequested`] bypasses both flags and the cursor
    ///   guard: an explicit request means now.
    ///
    /// Returns `None` when there is nothing safe to do.
    #[must_use]
    #[tracing::instrument(skip_all, fields(event = %event))]
    pub fn handle_event(&self, event: &TriggerEvent, host: &dyn EditorHost) -> Option<FixBatch> {
        match event {
            TriggerEvent::DiagnosticsChanged { uris } => {
                if !self.config.fix_on_error {
                    tracing::trace!("Fixing on diagnostics updates is disabled");
                    return None;
                }
                let Some(uri) = host.active_document() else {
                    tracing::trace!("No active document");
                    return None;
                };
                if !uris.contains(&uri) {
                    tracing::trace!(uri = %uri, "Update does not concern the active document");
                    return None;
                }
                self.evaluate(&uri, host, self.config.avoid_cursor)
            }
            TriggerEvent::WillSave { uri } => {
                if !self.config.fix_on_save {
                    tracing::trace!("Fixing on save is disabled");
                    return None;
                }
                self.evaluate(uri, host, false)
            }
            TriggerEvent::FixRequested => {
                let Some(uri) = host.active_document() else {
                    tracing::trace!("No active document to fix");
                    return None;
                };
                self.evaluate(&uri, host, false)
            }
        }
    }

    fn evaluate(
        &self,
        uri: &DocumentUri,
        host: &dyn EditorHost,
        avoid_cursor: bool,
    ) -> Option<FixBatch> {
        let Some(language_id) = host.language_id(uri) else {
            tracing::trace!(uri = %uri, "Document is not open");
            return None;
        };
        if !self.signatures.tracks_language(&language_id) {
            tracing::trace!(language = %language_id, "No signatures for this language");
            return None;
        }
        let Some(text) = host.document_text(uri) else {
            tracing::trace!(uri = %uri, "Document has no text snapshot");
            return None;
        };
        let diagnostics = host.diagnostics(uri);
        // The cursor is only relevant to the guard; don't bother the host
        // for it otherwise.
        let cursor_line = avoid_cursor.then(|| host.cursor_line(uri)).flatten();

        let edits = decide(
            &self.signatures,
            &DecisionInput {
                text: &text,
                language_id: &language_id,
                diagnostics: &diagnostics,
                cursor_line,
                avoid_cursor,
            },
        );
        if edits.is_empty() {
            return None;
        }
        tracing::info!(uri = %uri, edits = edits.len(), "Proposing terminator fixes");
        Some(FixBatch::new(uri.clone(), edits))
    }
}

impl Default for FixSession {
    fn default() -> Self {
        Self::new(AutofixConfig::default())
    }
}

fn to_signature(config: &SignatureConfig) -> TargetSignature {
    TargetSignature::new(
        config.language.as_str(),
        config.source.as_str(),
        config.message_prefix.as_str(),
        config.terminator,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_tracks_java() {
        let session = FixSession::default();
        assert!(session.signatures().tracks_language("java"));
        assert!(session.config().fix_on_error);
        assert!(!session.config().fix_on_save);
    }

    #[test]
    fn test_config_signatures_extend_the_table() {
        let config = AutofixConfig {
            signatures: vec![SignatureConfig {
                language: "kotlin".to_string(),
                source: "Kotlin".to_string(),
                message_prefix: "Expecting ';'".to_string(),
                terminator: ';',
            }],
            ..AutofixConfig::default()
        };

        let session = FixSession::new(config);
        assert_eq!(session.signatures().len(), 2);
        assert!(session.signatures().tracks_language("kotlin"));
    }

    #[test]
    fn test_reconfigure_rebuilds_the_table() {
        let mut session = FixSession::default();
        assert_eq!(session.signatures().len(), 1);

        session.reconfigure(AutofixConfig {
            fix_on_save: true,
            signatures: vec![SignatureConfig {
                language: "pascal".to_string(),
                source: "fpc".to_string(),
                message_prefix: "Fatal: Syntax error".to_string(),
                terminator: '.',
            }],
            ..AutofixConfig::default()
        });

        assert!(session.config().fix_on_save);
        assert_eq!(session.signatures().len(), 2);
    }
}
