//! CLI subcommands.

pub mod common;
pub mod fix;
pub mod signatures;
