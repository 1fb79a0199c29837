//! Registration diagnostics collaborator.
//!
//! Attach operations report through an explicitly injected
//! [`RegistrationLog`] rather than a process-wide sink, so embedders can
//! substitute any structured logger and tests can observe attachment
//! diagnostics deterministically. No behavior depends on the sink's output.

use tracing::{debug, error, info, warn};

/// Sink for leveled registration diagnostics.
///
/// `success` reports a completed attachment, `info` general registration
/// progress, `warning` recoverable oddities, and `error` fatal registration
/// problems.
pub trait RegistrationLog {
    /// Reports a completed attachment.
    fn success(&self, message: &str);

    /// Reports registration progress.
    fn info(&self, message: &str);

    /// Reports a recoverable problem.
    fn warning(&self, message: &str);

    /// Reports a fatal registration problem.
    fn error(&self, message: &str);
}

/// Default sink forwarding to the `tracing` facade.
///
/// Rendering (colorized console, JSON, ...) is the subscriber's concern.
///
/// # Examples
///
/// ```
/// use command_tree_core::{RegistrationLog, TracingLog};
///
/// let log = TracingLog;
/// log.success("profile - added subcommand 'view'");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl RegistrationLog for TracingLog {
    fn success(&self, message: &str) {
        info!(target: "command_tree", "{message}");
    }

    fn info(&self, message: &str) {
        debug!(target: "command_tree", "{message}");
    }

    fn warning(&self, message: &str) {
        warn!(target: "command_tree", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "command_tree", "{message}");
    }
}

/// Sink that drops every line.
///
/// Useful in tests and in embedders that register diagnostics elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl RegistrationLog for NullLog {
    fn success(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
