// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with translation catalogs embedded in
//! the binary. Locale resolution order: CLI flag, config file, OS locale,
//! then `en-US`.

pub mod fluent;
