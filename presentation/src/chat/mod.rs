//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for the chatbot.

mod repl;

pub use repl::ChatRepl;
