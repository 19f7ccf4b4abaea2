// SPDX-License-Identifier: MPL-2.0
//! Image selection: validation and loading of user-chosen files.
//!
//! Both input paths (file dialog and window drop) funnel into [`load`]. The
//! dialog already filters by extension, but dropped files can be anything, so
//! the same extension table backs an explicit check here.

use std::fmt;
use std::path::{Path, PathBuf};

/// Extensions accepted by the picker filter and the drop path, with their
/// mime types for the upload part.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// Returns the extensions alone, in the form `rfd` filter expects.
pub fn extension_filter() -> Vec<&'static str> {
    SUPPORTED_IMAGE_EXTENSIONS.iter().map(|(ext, _)| *ext).collect()
}

/// Looks up the mime type for a path based on its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    SUPPORTED_IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// Whether the path looks like a supported image file.
pub fn is_supported_image(path: &Path) -> bool {
    mime_for_path(path).is_some()
}

/// An image chosen by the user, held in memory for preview and upload.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
    pub file_name: String,
    pub path: PathBuf,
}

/// Errors produced while turning a path into a [`SelectedImage`].
#[derive(Debug, Clone)]
pub enum SelectionError {
    /// The file extension is not in the supported image set.
    UnsupportedType { file_name: String },
    /// The file could not be read.
    Read(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnsupportedType { file_name } => {
                write!(f, "Unsupported image type: {}", file_name)
            }
            SelectionError::Read(msg) => write!(f, "Read failed: {}", msg),
        }
    }
}

impl std::error::Error for SelectionError {}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Validates and reads an image file.
///
/// Runs inside an Iced task so the read does not block the UI thread.
pub async fn load(path: PathBuf) -> Result<SelectedImage, SelectionError> {
    let Some(mime) = mime_for_path(&path) else {
        return Err(SelectionError::UnsupportedType {
            file_name: display_file_name(&path),
        });
    };

    let file_name = display_file_name(&path);
    let bytes = std::fs::read(&path).map_err(|e| SelectionError::Read(e.to_string()))?;

    Ok(SelectedImage {
        bytes,
        mime,
        file_name,
        path,
    })
}
