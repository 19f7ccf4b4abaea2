// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

/// A diagnostic event with the moment it was recorded (monotonic).
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}

/// What happened. Failure detail lives here and here only; the UI shows a
/// generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A caption request settled (success or failure).
    CaptionRequestSettled { success: bool },
    /// A caption request failed, with the underlying error detail.
    CaptionRequestFailed { detail: String },
    /// A dropped file was rejected by the selection boundary.
    FileRejected { file_name: String },
    /// A selected file could not be read.
    SelectionReadFailed { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_records_creation_time() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::CaptionRequestSettled {
            success: true,
        });
        assert!(event.at >= before);
    }
}
