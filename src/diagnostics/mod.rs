// SPDX-License-Identifier: MPL-2.0
//! Diagnostics channel for failure detail.
//!
//! User-facing errors are deliberately generic; the real reasons (HTTP
//! status, transport error, rejected file) land here, in a memory-bounded
//! ring buffer that can be inspected in tests or dumped while debugging.

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, DiagnosticEventKind};

/// Default number of retained events.
pub const DEFAULT_CAPACITY: usize = 1000;

/// The application's diagnostic log.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Records an event.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    /// Events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
