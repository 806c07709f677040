//! # semifix-engine
//!
//! Editor-facing session layer for terminator autofixing. It connects the
//! pure decision pipeline in `semifix-fixer` to an editor through two small
//! abstractions:
//!
//! - [`EditorHost`] -- read-only view of editor state (active document,
//!   text, cursor, diagnostics), implemented by each integration
//! - [`TriggerEvent`] -- the three occasions on which fixes are considered:
//!   a diagnostics update, an imminent save, or an explicit request
//!
//! [`FixSession`] holds the effective configuration and the signature table
//! and turns one event plus one host snapshot into at most one
//! [`FixBatch`](semifix_types::FixBatch). [`Subscriptions`] keeps the set of
//! live event registrations in step with the configuration.
//!
//! ```text
//! editor integration (LSP, CLI, ...)
//!     |  TriggerEvent + &dyn EditorHost
//!     v
//! semifix-engine (this crate)  <- session, gating, subscriptions
//!     |
//!     v
//! semifix-fixer  <- signature table, decision pipeline
//! ```

mod events;
mod host;
mod session;
mod subscriptions;

pub use events::{TriggerEvent, TriggerKind};
pub use host::EditorHost;
pub use session::FixSession;
pub use subscriptions::Subscriptions;
