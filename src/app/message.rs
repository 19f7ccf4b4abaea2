// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::caption::CaptionError;
use crate::selection::{SelectedImage, SelectionError};
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Trigger the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog (`None` when cancelled).
    FileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A file is being dragged over the window.
    FileHovered,
    /// Dragged files left the window without dropping.
    FilesHoveredLeft,
    /// A chosen file finished loading (or failed to).
    SelectionLoaded(Result<SelectedImage, SelectionError>),
    /// The user asked to submit the current selection.
    Submit,
    /// A caption request settled.
    ///
    /// `generation` identifies the selection the request was made for, so a
    /// stale response can be recognized and its outcome discarded.
    CaptionSettled {
        generation: u64,
        result: Result<String, CaptionError>,
    },
    /// Notification state change (dismiss, tick).
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-hide.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional captioning endpoint override (takes precedence over config).
    pub endpoint: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
}
