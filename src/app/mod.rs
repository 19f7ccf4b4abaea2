// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the whole workflow state: the current selection and
//! its preview, the submission state machine, the last caption outcome, and
//! the ambient pieces (localization, notifications, diagnostics). Policy
//! decisions (submission gating, stale-response handling) live next to the
//! update loop in `update.rs` so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::caption::CaptionClient;
use crate::config;
use crate::diagnostics::DiagnosticsLog;
use crate::i18n::fluent::I18n;
use crate::selection::{self, SelectedImage};
use crate::ui::notifications;
use iced::widget::image;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// The current selection together with its preview handle.
///
/// Bundling them guarantees the preview exists exactly when a selection
/// exists, and that replacing the selection drops the previous preview (and
/// its decoded texture) in the same assignment.
#[derive(Debug, Clone)]
pub struct Selected {
    pub image: SelectedImage,
    pub preview: image::Handle,
}

impl Selected {
    pub fn new(image: SelectedImage) -> Self {
        let preview = image::Handle::from_bytes(image.bytes.clone());
        Self { image, preview }
    }
}

/// Submission state machine. `InFlight` doubles as the mutual-exclusion flag:
/// no second request can start until the current one settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    /// A request is outstanding for the selection identified by `generation`.
    InFlight { generation: u64 },
}

impl Submission {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Submission::Idle)
    }
}

/// Outcome of the last settled caption request.
///
/// Success and failure are distinct variants so presentation and tests never
/// have to sniff strings. The failure carries a message key, not user text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptionOutcome {
    #[default]
    Empty,
    Success(String),
    Failure(&'static str),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    client: CaptionClient,
    selected: Option<Selected>,
    outcome: CaptionOutcome,
    submission: Submission,
    /// Bumped on every accepted selection; tags in-flight requests so stale
    /// responses can be discarded.
    selection_generation: u64,
    /// Whether a file is currently hovering over the window.
    drop_hover: bool,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsLog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_selection", &self.selected.is_some())
            .field("submission", &self.submission)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off loading of the
    /// image path received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let endpoint = flags
            .endpoint
            .unwrap_or_else(|| config.endpoint().to_string());
        let client =
            CaptionClient::new(endpoint).expect("Failed to construct the HTTP client at startup");

        let mut app = App {
            i18n,
            client,
            selected: None,
            outcome: CaptionOutcome::default(),
            submission: Submission::default(),
            selection_generation: 0,
            drop_hover: false,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsLog::default(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path_str) => {
                let path = std::path::PathBuf::from(path_str);
                Task::perform(selection::load(path), Message::SelectionLoaded)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.selected {
            Some(selected) => format!("{} - {app_name}", selected.image.file_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            client: &self.client,
            selected: &mut self.selected,
            outcome: &mut self.outcome,
            submission: &mut self.submission,
            selection_generation: &mut self.selection_generation,
            drop_hover: &mut self.drop_hover,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::OpenFileDialog => update::handle_open_file_dialog(),
            Message::FileDialogResult(path) => {
                update::handle_file_dialog_result(&mut ctx, path)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::FileHovered => update::handle_file_hovered(&mut ctx),
            Message::FilesHoveredLeft => update::handle_files_hovered_left(&mut ctx),
            Message::SelectionLoaded(result) => {
                update::handle_selection_loaded(&mut ctx, result)
            }
            Message::Submit => update::handle_submit(&mut ctx),
            Message::CaptionSettled { generation, result } => {
                update::handle_caption_settled(&mut ctx, generation, result)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.update(notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            selected: self.selected.as_ref(),
            outcome: &self.outcome,
            submission: self.submission,
            drop_hover: self.drop_hover,
            notifications: &self.notifications,
        })
    }
}
