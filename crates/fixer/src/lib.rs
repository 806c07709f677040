//! The semifix decision layer.
//!
//! Everything here is pure: given a snapshot of a document (its text, its
//! diagnostics, optionally the cursor), [`decide`] returns the insertions
//! that would repair the missing statement terminators the diagnostics
//! describe, or nothing at all when any guard says the file is not safe to
//! touch. Applying the result is the caller's business; [`apply_edits`]
//! exists for callers that hold the text as a plain string (the CLI, tests).
//!
//! The recognizable error shapes live in a [`SignatureSet`]; the built-in
//! table knows the Eclipse JDT missing-semicolon diagnostic and hosts can
//! append more entries without touching the decision logic.

mod apply;
mod decider;
mod signatures;
mod text;

pub use apply::apply_edits;
pub use decider::{decide, DecisionInput};
pub use signatures::{SignatureSet, TargetSignature};
