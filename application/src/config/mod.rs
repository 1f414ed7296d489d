//! Application-level configuration.
//!
//! - [`InvokeOptions`]: model, generation parameters and fallback for chat calls

pub mod invoke_options;

pub use invoke_options::InvokeOptions;
