//! Foundation types for semifix.
//!
//! This crate provides the shared vocabulary used across the semifix stack.
//! It has zero external dependencies, making it suitable as a foundation layer.
//!
//! # Type Categories
//!
//! - **Document types**: [`DocumentUri`]
//! - **Position types**: [`Position`], [`Range`]
//! - **Diagnostic types**: [`Severity`], [`Diagnostic`]
//! - **Edit types**: [`FixEdit`], [`FixBatch`]

mod diagnostic;
mod edits;
mod file;
mod position;
mod severity;

pub use diagnostic::Diagnostic;
pub use edits::{FixBatch, FixEdit};
pub use file::DocumentUri;
pub use position::{Position, Range};
pub use severity::Severity;
