//! License image selection and acceptance checks

use super::error::ValidationError;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted upload, inclusive (5 MiB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Declared content types must start with this prefix
pub const IMAGE_CONTENT_PREFIX: &str = "image/";

/// A file the user picked for the license upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
    /// Original file name, preserved in the multipart part
    pub file_name: String,
    /// Declared content type, derived from the file extension
    pub content_type: String,
    pub size: u64,
}

impl SelectedImage {
    /// Read file metadata for a user-entered path.
    ///
    /// Surrounding whitespace and quotes (as left by drag-and-drop into a
    /// terminal) are stripped. No content checks happen here.
    pub fn inspect(raw_path: &str) -> Result<Self, ValidationError> {
        let cleaned = clean_path(raw_path);
        let path = PathBuf::from(cleaned);

        let metadata = fs::metadata(&path).map_err(|e| ValidationError::Unreadable {
            path: cleaned.to_string(),
            reason: e.to_string(),
        })?;
        if !metadata.is_file() {
            return Err(ValidationError::Unreadable {
                path: cleaned.to_string(),
                reason: "not a regular file".to_string(),
            });
        }

        Ok(Self {
            file_name: file_name_of(&path),
            content_type: guess_content_type(&path),
            size: metadata.len(),
            path,
        })
    }

    /// Inspect a path and apply the acceptance checks in one step
    pub fn select(raw_path: &str) -> Result<Self, ValidationError> {
        let image = Self::inspect(raw_path)?;
        check_image(&image.content_type, image.size)?;
        Ok(image)
    }

    /// Human readable size, e.g. "2.0 MB"
    pub fn size_label(&self) -> String {
        format_size(self.size)
    }
}

/// Type check first, then size; the boundary size is accepted.
pub fn check_image(content_type: &str, size: u64) -> Result<(), ValidationError> {
    if !content_type.starts_with(IMAGE_CONTENT_PREFIX) {
        return Err(ValidationError::NotAnImage {
            content_type: content_type.to_string(),
        });
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge { size });
    }
    Ok(())
}

/// Content type as a browser would declare it; unknown extensions yield ""
fn guess_content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default()
        .to_string()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn clean_path(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '\'' || c == '"')
}

pub fn format_size(size: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if size >= MIB {
        format!("{:.1} MB", size as f64 / MIB as f64)
    } else if size >= KIB {
        format!("{:.1} KB", size as f64 / KIB as f64)
    } else {
        format!("{size} B")
    }
}
