// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! The handlers hold every state-machine rule of the workflow:
//!
//! - a new accepted selection replaces the preview, clears the previous
//!   outcome, and bumps the selection generation;
//! - a submit is a no-op unless a selection exists and nothing is in flight;
//! - a settled request always returns the machine to Idle exactly once, but
//!   its outcome is applied only when it still belongs to the current
//!   selection (stale responses are discarded);
//! - all failure detail goes to the diagnostics log, the user sees one
//!   generic message.

use super::{CaptionOutcome, Message, Selected, Submission};
use crate::caption::{CaptionClient, CaptionError};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsLog};
use crate::selection::{self, SelectedImage, SelectionError};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Mutable borrows of the `App` fields the handlers operate on.
pub struct UpdateContext<'a> {
    pub client: &'a CaptionClient,
    pub selected: &'a mut Option<Selected>,
    pub outcome: &'a mut CaptionOutcome,
    pub submission: &'a mut Submission,
    pub selection_generation: &'a mut u64,
    pub drop_hover: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsLog,
}

/// Opens the native file dialog, filtered to supported image types.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", &selection::extension_filter())
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_file_dialog_result(
    _ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog; selection state is untouched.
        return Task::none();
    };
    load_selection(path)
}

/// Handles a file dropped on the window.
///
/// Unlike the dialog, a drop can deliver any file, so the extension check
/// runs here before anything is read.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.drop_hover = false;

    if !selection::is_supported_image(&path) {
        reject_file(ctx, &path);
        return Task::none();
    }

    load_selection(path)
}

pub fn handle_file_hovered(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.drop_hover = true;
    Task::none()
}

pub fn handle_files_hovered_left(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.drop_hover = false;
    Task::none()
}

/// Installs a freshly loaded selection, or surfaces why it was refused.
pub fn handle_selection_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<SelectedImage, SelectionError>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            // Replacing `Selected` drops the previous preview handle together
            // with the old image; the outcome reset keeps a stale caption
            // from describing the new picture.
            *ctx.selected = Some(Selected::new(image));
            *ctx.outcome = CaptionOutcome::Empty;
            *ctx.selection_generation += 1;
        }
        Err(SelectionError::UnsupportedType { file_name }) => {
            ctx.notifications.push(
                Notification::warning("notification-unsupported-file")
                    .with_arg("name", file_name.clone()),
            );
            ctx.diagnostics
                .record(DiagnosticEventKind::FileRejected { file_name });
        }
        Err(SelectionError::Read(detail)) => {
            ctx.notifications
                .push(Notification::warning("notification-read-error"));
            ctx.diagnostics
                .record(DiagnosticEventKind::SelectionReadFailed { detail });
        }
    }
    Task::none()
}

/// Starts a caption request for the current selection.
///
/// The view disables the submit button while this is not allowed; the guard
/// here enforces the same rule for any other path into this handler.
pub fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.submission.is_idle() {
        return Task::none();
    }
    let Some(selected) = ctx.selected.as_ref() else {
        return Task::none();
    };

    let generation = *ctx.selection_generation;
    *ctx.submission = Submission::InFlight { generation };

    let client = ctx.client.clone();
    let image = selected.image.clone();
    Task::perform(
        async move { client.request_caption(&image).await },
        move |result| Message::CaptionSettled { generation, result },
    )
}

/// Applies a settled caption request.
pub fn handle_caption_settled(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<String, CaptionError>,
) -> Task<Message> {
    // Only one request can be outstanding, so this settle is the one that
    // armed InFlight: return to Idle unconditionally.
    *ctx.submission = Submission::Idle;

    let success = result.is_ok();
    if let Err(err) = &result {
        ctx.diagnostics.record(DiagnosticEventKind::CaptionRequestFailed {
            detail: err.detail(),
        });
    }
    ctx.diagnostics
        .record(DiagnosticEventKind::CaptionRequestSettled { success });

    // A response for a superseded selection settles the machine but must not
    // overwrite state belonging to the newer image.
    if generation != *ctx.selection_generation {
        return Task::none();
    }

    *ctx.outcome = match result {
        Ok(caption) => CaptionOutcome::Success(caption),
        Err(_) => CaptionOutcome::Failure("caption-error-generic"),
    };

    Task::none()
}

fn reject_file(ctx: &mut UpdateContext<'_>, path: &std::path::Path) {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    ctx.notifications.push(
        Notification::warning("notification-unsupported-file")
            .with_arg("name", file_name.clone()),
    );
    ctx.diagnostics
        .record(DiagnosticEventKind::FileRejected { file_name });
}

fn load_selection(path: PathBuf) -> Task<Message> {
    Task::perform(selection::load(path), Message::SelectionLoaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestState {
        client: CaptionClient,
        selected: Option<Selected>,
        outcome: CaptionOutcome,
        submission: Submission,
        selection_generation: u64,
        drop_hover: bool,
        notifications: notifications::Manager,
        diagnostics: DiagnosticsLog,
    }

    impl TestState {
        fn new() -> Self {
            Self {
                client: CaptionClient::new("http://localhost:8000/caption")
                    .expect("Failed to build client"),
                selected: None,
                outcome: CaptionOutcome::Empty,
                submission: Submission::Idle,
                selection_generation: 0,
                drop_hover: false,
                notifications: notifications::Manager::new(),
                diagnostics: DiagnosticsLog::default(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                client: &self.client,
                selected: &mut self.selected,
                outcome: &mut self.outcome,
                submission: &mut self.submission,
                selection_generation: &mut self.selection_generation,
                drop_hover: &mut self.drop_hover,
                notifications: &mut self.notifications,
                diagnostics: &mut self.diagnostics,
            }
        }

        fn select(&mut self, file_name: &str) {
            let image = SelectedImage {
                bytes: vec![1, 2, 3],
                mime: "image/png",
                file_name: file_name.to_string(),
                path: PathBuf::from(file_name),
            };
            let _ = handle_selection_loaded(&mut self.ctx(), Ok(image));
        }
    }

    fn failed_kinds(diagnostics: &DiagnosticsLog) -> Vec<DiagnosticEventKind> {
        diagnostics.events().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn selection_sets_preview_and_clears_outcome() {
        let mut state = TestState::new();
        state.outcome = CaptionOutcome::Success("old caption".to_string());

        state.select("first.png");

        assert!(state.selected.is_some());
        assert_eq!(state.outcome, CaptionOutcome::Empty);
        assert_eq!(state.selection_generation, 1);
    }

    #[test]
    fn reselection_replaces_preview_and_resets_outcome_again() {
        let mut state = TestState::new();
        state.select("first.png");
        state.outcome = CaptionOutcome::Failure("caption-error-generic");

        state.select("second.png");

        assert_eq!(state.outcome, CaptionOutcome::Empty);
        assert_eq!(state.selection_generation, 2);
        let selected = state.selected.as_ref().expect("selection should be set");
        assert_eq!(selected.image.file_name, "second.png");
    }

    #[test]
    fn submit_without_selection_is_noop() {
        let mut state = TestState::new();
        let _ = handle_submit(&mut state.ctx());
        assert_eq!(state.submission, Submission::Idle);
    }

    #[test]
    fn submit_while_in_flight_is_noop() {
        let mut state = TestState::new();
        state.select("first.png");
        state.submission = Submission::InFlight { generation: 1 };

        let _ = handle_submit(&mut state.ctx());

        // Still the original request; no second submission started.
        assert_eq!(state.submission, Submission::InFlight { generation: 1 });
    }

    #[test]
    fn submit_captures_current_generation() {
        let mut state = TestState::new();
        state.select("first.png");

        let _ = handle_submit(&mut state.ctx());

        assert_eq!(state.submission, Submission::InFlight { generation: 1 });
    }

    #[test]
    fn settle_success_applies_outcome_and_returns_idle() {
        let mut state = TestState::new();
        state.select("first.png");
        state.submission = Submission::InFlight { generation: 1 };

        let _ = handle_caption_settled(&mut state.ctx(), 1, Ok("a cat".to_string()));

        assert_eq!(state.submission, Submission::Idle);
        assert_eq!(state.outcome, CaptionOutcome::Success("a cat".to_string()));
        assert_eq!(
            failed_kinds(&state.diagnostics),
            vec![DiagnosticEventKind::CaptionRequestSettled { success: true }]
        );
    }

    #[test]
    fn settle_failure_sets_generic_outcome_and_logs_detail() {
        let mut state = TestState::new();
        state.select("first.png");
        state.submission = Submission::InFlight { generation: 1 };

        let err = CaptionError::Status {
            code: 500,
            detail: Some("model not loaded".to_string()),
        };
        let _ = handle_caption_settled(&mut state.ctx(), 1, Err(err));

        assert_eq!(state.submission, Submission::Idle);
        assert_eq!(
            state.outcome,
            CaptionOutcome::Failure("caption-error-generic")
        );
        // Detail is available in diagnostics, never in the outcome.
        assert_eq!(
            failed_kinds(&state.diagnostics),
            vec![
                DiagnosticEventKind::CaptionRequestFailed {
                    detail: "status 500: model not loaded".to_string()
                },
                DiagnosticEventKind::CaptionRequestSettled { success: false },
            ]
        );
    }

    #[test]
    fn stale_response_is_discarded_but_still_settles() {
        let mut state = TestState::new();
        state.select("first.png");
        let _ = handle_submit(&mut state.ctx());
        assert_eq!(state.submission, Submission::InFlight { generation: 1 });

        // A new image arrives while the request for the first is in flight.
        state.select("second.png");
        assert_eq!(state.selection_generation, 2);

        // The stale response settles the machine without touching the outcome.
        let _ = handle_caption_settled(&mut state.ctx(), 1, Ok("a cat".to_string()));
        assert_eq!(state.submission, Submission::Idle);
        assert_eq!(state.outcome, CaptionOutcome::Empty);

        // The follow-up submission for the new image wins.
        let _ = handle_submit(&mut state.ctx());
        let _ = handle_caption_settled(&mut state.ctx(), 2, Ok("a dog".to_string()));
        assert_eq!(state.outcome, CaptionOutcome::Success("a dog".to_string()));
    }

    #[test]
    fn dropped_non_image_is_rejected_without_state_change() {
        let mut state = TestState::new();
        let _ = handle_file_dropped(&mut state.ctx(), PathBuf::from("/tmp/notes.txt"));

        assert!(state.selected.is_none());
        assert_eq!(state.selection_generation, 0);
        assert_eq!(state.notifications.visible().count(), 1);
        assert_eq!(
            failed_kinds(&state.diagnostics),
            vec![DiagnosticEventKind::FileRejected {
                file_name: "notes.txt".to_string()
            }]
        );
    }

    #[test]
    fn cancelled_dialog_is_noop() {
        let mut state = TestState::new();
        let _ = handle_file_dialog_result(&mut state.ctx(), None);

        assert!(state.selected.is_none());
        assert_eq!(state.selection_generation, 0);
        assert!(state.diagnostics.is_empty());
    }

    #[test]
    fn read_failure_surfaces_notification_and_diagnostics() {
        let mut state = TestState::new();
        let _ = handle_selection_loaded(
            &mut state.ctx(),
            Err(SelectionError::Read("permission denied".to_string())),
        );

        assert!(state.selected.is_none());
        assert_eq!(state.notifications.visible().count(), 1);
        assert_eq!(
            failed_kinds(&state.diagnostics),
            vec![DiagnosticEventKind::SelectionReadFailed {
                detail: "permission denied".to_string()
            }]
        );
    }

    #[test]
    fn hover_events_toggle_drop_highlight() {
        let mut state = TestState::new();
        let _ = handle_file_hovered(&mut state.ctx());
        assert!(state.drop_hover);
        let _ = handle_files_hovered_left(&mut state.ctx());
        assert!(!state.drop_hover);
    }
}
