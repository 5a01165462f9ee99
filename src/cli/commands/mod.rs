//! CLI commands

pub mod analyze;
pub mod play;
