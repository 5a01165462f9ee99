//! CLI infrastructure for the gridlock game
//!
//! This module provides the command-line interface for playing interactive
//! games against the engine and for analyzing positions.

pub mod commands;
pub mod output;
