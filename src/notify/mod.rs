//! User-facing notifications.
//!
//! # Responsibilities
//! - Define the toast sink the form reports outcomes to
//! - Provide log-backed and terminal-backed sinks
//!
//! # Design Decisions
//! - Injected per form rather than a global toast singleton
//! - Destructive severity marks failures; everything else is default

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Sink for notifications raised by the form.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Emits notifications as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.severity {
            Severity::Default => {
                tracing::info!(title = %toast.title, description = %toast.description, "Notification")
            }
            Severity::Destructive => {
                tracing::warn!(title = %toast.title, description = %toast.description, "Notification")
            }
        }
    }
}

/// Writes notifications to a terminal-like writer. Failures go to stderr.
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn stdio() -> Self {
        Self::with_writers(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    pub fn with_writers(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        let target = match toast.severity {
            Severity::Default => &self.out,
            Severity::Destructive => &self.err,
        };
        let mut writer = target.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(writer, "[{}] {}", toast.title, toast.description) {
            tracing::warn!(error = %e, "Failed to write notification");
        }
    }
}
