//! Warning sink for the generator
//!
//! The generator only produces messages; where they end up is up to the
//! caller. The binary logs them, tests collect them.

use tracing::warn;

pub trait Diagnostics {
    /// Hand off one fully formed warning.
    fn warn(&mut self, message: String);
}

/// Collects warnings in order.
impl Diagnostics for Vec<String> {
    fn warn(&mut self, message: String) {
        self.push(message);
    }
}

/// Forwards warnings to `tracing` and counts them.
#[derive(Debug, Default)]
pub struct TracingDiagnostics {
    count: usize,
}

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings emitted so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Diagnostics for TracingDiagnostics {
    fn warn(&mut self, message: String) {
        self.count += 1;
        warn!("{}", message);
    }
}
