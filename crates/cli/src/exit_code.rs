//! Exit codes for the semifix CLI.
//!
//! Distinct codes let scripts and pre-commit hooks tell "the file is fine
//! now" apart from "the file is too broken to autofix" without parsing
//! any output.

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The file was fixed, or there was nothing to fix
    Success = 0,
    /// An input could not be read or parsed (source file, diagnostics, config)
    InputError = 1,
    /// Unrelated syntax errors suppressed the fix
    FixesSuppressed = 2,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::InputError => write!(f, "input error"),
            Self::FixesSuppressed => write!(f, "fixes suppressed"),
        }
    }
}
