//! Notification and progress display for remote calls

use chatbot_application::Notifier;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports notifications with a spinner while a remote call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ProgressReporter {
    fn success(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{} {}", "✅".green(), message.green());
    }

    fn error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{} {}", "❌".red(), message.red());
    }

    fn on_request_start(&self, label: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", label));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(previous) = spinner.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_request_end(&self) {
        self.clear_spinner();
    }
}

/// Simple text-based notifications (no spinner)
pub struct SimpleProgress;

impl Notifier for SimpleProgress {
    fn success(&self, message: &str) {
        eprintln!("{} {}", "v".green(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "x".red(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_is_cleared_after_request() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start("Waiting for model");
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_request_end();
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_notification_clears_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start("Authenticating");
        reporter.error("Authentication failed: boom");
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
