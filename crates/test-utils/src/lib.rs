//! Shared test utilities for semifix crates.
//!
//! Fixture builders produce the JDT-shaped diagnostics the decider eats all
//! day; the assertion helpers format decider output consistently for
//! snapshot tests.

mod assertions;
mod fixtures;

pub use assertions::format_edits;
pub use fixtures::{
    main_java_uri, missing_semicolon_error, range_on_line, unexpected_token_error,
    JAVA_MISSING_TERMINATOR, JAVA_TERMINATED,
};
