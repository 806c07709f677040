//! Building trigger events from LSP notifications.

use lsp_types::{PublishDiagnosticsParams, WillSaveTextDocumentParams};
use semifix_engine::TriggerEvent;
use semifix_types::{Diagnostic, DocumentUri};

use crate::conversions::convert_lsp_diagnostic;

/// The event for a `textDocument/publishDiagnostics` notification.
///
/// Only the document identity travels in the event; the diagnostics
/// themselves go into the host's state via [`published_diagnostics`].
#[must_use]
pub fn diagnostics_changed(params: &PublishDiagnosticsParams) -> TriggerEvent {
    TriggerEvent::DiagnosticsChanged {
        uris: vec![DocumentUri::new(params.uri.as_str())],
    }
}

/// The event for a `textDocument/willSave` notification.
#[must_use]
pub fn will_save(params: &WillSaveTextDocumentParams) -> TriggerEvent {
    TriggerEvent::WillSave {
        uri: DocumentUri::new(params.text_document.uri.as_str()),
    }
}

/// The converted payload of a `textDocument/publishDiagnostics`
/// notification, ready to store in host state before handling the event.
#[must_use]
pub fn published_diagnostics(params: PublishDiagnosticsParams) -> (DocumentUri, Vec<Diagnostic>) {
    let uri = DocumentUri::new(params.uri.as_str());
    let diagnostics = params
        .diagnostics
        .into_iter()
        .map(convert_lsp_diagnostic)
        .collect();
    (uri, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsp_types::{DiagnosticSeverity, TextDocumentIdentifier, TextDocumentSaveReason, Uri};

    fn java_uri() -> Uri {
        "file:///src/Main.java".parse().unwrap()
    }

    #[test]
    fn test_diagnostics_changed_event_carries_the_uri() {
        let params = PublishDiagnosticsParams {
            uri: java_uri(),
            diagnostics: Vec::new(),
            version: None,
        };

        let event = diagnostics_changed(&params);
        assert_eq!(
            event,
            TriggerEvent::DiagnosticsChanged {
                uris: vec![DocumentUri::new("file:///src/Main.java")],
            }
        );
    }

    #[test]
    fn test_will_save_event_carries_the_uri() {
        let params = WillSaveTextDocumentParams {
            text_document: TextDocumentIdentifier { uri: java_uri() },
            reason: TextDocumentSaveReason::MANUAL,
        };

        let event = will_save(&params);
        assert_eq!(
            event,
            TriggerEvent::WillSave {
                uri: DocumentUri::new("file:///src/Main.java"),
            }
        );
    }

    #[test]
    fn test_published_diagnostics_are_converted() {
        let params = PublishDiagnosticsParams {
            uri: java_uri(),
            diagnostics: vec![lsp_types::Diagnostic {
                range: lsp_types::Range::default(),
                severity: Some(DiagnosticSeverity::ERROR),
                source: Some("Java".to_string()),
                message: "Syntax error, insert \";\" to complete Statement".to_string(),
                ..Default::default()
            }],
            version: None,
        };

        let (uri, diagnostics) = published_diagnostics(params);
        assert_eq!(uri.as_str(), "file:///src/Main.java");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
    }
}
