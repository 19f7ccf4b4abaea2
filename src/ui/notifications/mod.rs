// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for transient user feedback.
//!
//! Notifications carry an i18n message key (resolved at render time) and a
//! severity that drives color and auto-dismiss behavior. The [`Manager`]
//! caps how many are visible and queues the rest.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
