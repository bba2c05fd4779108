//! Scoped preview references for the selected license image
//!
//! A `PreviewHandle` plays the role of a browser object URL: it is issued
//! by a `PreviewRegistry` when an image is accepted and released from the
//! registry when dropped. Replacing or resetting the form drops the old
//! handle, so references never accumulate across repeated selections.

use super::image::SelectedImage;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

type LiveSet = Arc<Mutex<HashSet<String>>>;

/// Issues preview handles and tracks which are still live
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    live: LiveSet,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a handle for an accepted image
    pub fn acquire(&self, image: &SelectedImage) -> PreviewHandle {
        let url = format!("preview:{}", Uuid::new_v4());
        if let Ok(mut live) = self.live.lock() {
            live.insert(url.clone());
        }

        // Dimensions are informational; undecodable files still preview
        let dimensions = ::image::image_dimensions(&image.path).ok();
        tracing::debug!(%url, file = %image.file_name, ?dimensions, "Acquired preview");

        PreviewHandle {
            url,
            file_name: image.file_name.clone(),
            content_type: image.content_type.clone(),
            size_label: image.size_label(),
            dimensions,
            live: Arc::clone(&self.live),
        }
    }

    /// Number of handles not yet released
    pub fn live_count(&self) -> usize {
        self.live.lock().map(|live| live.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_live(&self, url: &str) -> bool {
        self.live
            .lock()
            .map(|live| live.contains(url))
            .unwrap_or(false)
    }
}

/// Display data for the selected image, released on drop
#[derive(Debug)]
pub struct PreviewHandle {
    url: String,
    pub file_name: String,
    pub content_type: String,
    pub size_label: String,
    /// Pixel dimensions when the file decodes as an image
    pub dimensions: Option<(u32, u32)>,
    live: LiveSet,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Ok(mut live) = self.live.lock() {
            live.remove(&self.url);
        }
        tracing::debug!(url = %self.url, "Released preview");
    }
}
