// SPDX-License-Identifier: MPL-2.0
//! Default values for user-configurable settings.

/// Captioning service endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/caption";
