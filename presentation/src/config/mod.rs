//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use chatbot_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Output format for answers and listings
    pub format: OutputFormat,
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Path to readline history file
    pub history_file: Option<PathBuf>,
}
