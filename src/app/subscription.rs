// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window-level drag-and-drop events are the second input path next to the
//! file dialog. Hover events only drive the drop-zone highlight; the drop
//! event carries the path into the selection flow.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval for the notification auto-dismiss tick.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Routes native window events to messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Window(iced::window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(iced::window::Event::FilesHoveredLeft) => {
            Some(Message::FilesHoveredLeft)
        }
        _ => None,
    })
}

/// Periodic tick, only while notifications are showing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
