// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks: design tokens, widget styles, and toast
//! notifications.

pub mod design_tokens;
pub mod notifications;
pub mod styles;
