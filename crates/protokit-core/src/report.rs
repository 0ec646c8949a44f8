//! Error reporting boundary
//!
//! Shape factories do not own how failures are surfaced. They hand the error to
//! an [`ErrorReporter`] supplied by the host and carry on with empty geometry.

use crate::error::Error;

/// Receives errors that were recovered from locally.
pub trait ErrorReporter {
    fn report(&self, error: &Error);
}

impl<F> ErrorReporter for F
where
    F: Fn(&Error),
{
    fn report(&self, error: &Error) {
        self(error)
    }
}

/// Reporter that forwards every error to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &Error) {
        tracing::error!(%error, "recovered from invalid geometry input");
    }
}
