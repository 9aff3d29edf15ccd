//! Diagnostic sinks
//!
//! `verify` never returns its internal faults. They are handed to a sink
//! instead so operators can still see corrupt hashes or library failures.

use crate::error::HasherError;
use tracing::warn;

/// Receives faults absorbed by the fail-closed verification path
pub trait DiagnosticSink: Send + Sync {
    fn verification_fault(&self, error: &HasherError);
}

/// Default sink: forwards faults to `tracing` at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn verification_fault(&self, error: &HasherError) {
        warn!(error = %error, "Password verification failed closed");
    }
}

/// Discards every fault
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn verification_fault(&self, _error: &HasherError) {}
}
