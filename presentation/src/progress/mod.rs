//! Progress and notification display

pub mod reporter;
