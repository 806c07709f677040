//! # semifix-lsp
//!
//! Adapters between LSP protocol shapes and the semifix model, for hosts
//! whose diagnostics and edits travel as `lsp-types`. Two small modules:
//!
//! - [`conversions`] -- `lsp-types` types in, `semifix-types` types out,
//!   and back again for the edits the session proposes
//! - [`events`] -- build [`TriggerEvent`](semifix_engine::TriggerEvent)s
//!   from the LSP notifications that carry them
//!
//! The adapter is deliberately free of transport concerns: it never talks
//! to a socket, so the same conversions serve a language server, an editor
//! plugin, or the CLI replaying exported diagnostics.

pub mod conversions;
pub mod events;

pub use conversions::{
    batch_to_workspace_edit, convert_edit, convert_lsp_diagnostic, convert_lsp_position,
    convert_lsp_range, convert_lsp_severity, convert_position, convert_range, ConvertError,
    IntoLsp, IntoSemifix,
};
pub use events::{diagnostics_changed, published_diagnostics, will_save};
