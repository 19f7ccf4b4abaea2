// SPDX-License-Identifier: MPL-2.0
//! `iced_caption` is a small desktop client for an image captioning service,
//! built with the Iced GUI framework.
//!
//! The user selects an image through a file dialog or by dropping it on the
//! window, submits it to the configured captioning endpoint, and the returned
//! caption (or a generic error) is shown below the preview.

pub mod app;
pub mod caption;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod selection;
pub mod ui;
