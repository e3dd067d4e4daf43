use std::path::PathBuf;
use tracing::debug;

/// Image shown for records without a usable image of their own.
pub const DEFAULT_IMAGE: &str = "images/default.jpg";

/// Resolves a record's image reference, falling back to a default image.
///
/// References that are absent, empty, or (when a base directory is known)
/// point at a file that does not exist resolve to the default. Remote
/// references (`scheme://…`, `data:`) are passed through untouched.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_dir: Option<PathBuf>,
    default_image: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self {
            base_dir: None,
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }
}

impl ImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks relative references against files under `dir`.
    pub fn with_base_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.base_dir = dir;
        self
    }

    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    pub fn resolve(&self, image_ref: Option<&str>) -> String {
        let Some(reference) = image_ref.map(str::trim).filter(|r| !r.is_empty()) else {
            return self.default_image.clone();
        };

        if is_remote(reference) {
            return reference.to_string();
        }

        if let Some(base) = &self.base_dir {
            if !base.join(reference).is_file() {
                debug!(image = reference, "image not found, using default");
                return self.default_image.clone();
            }
        }

        reference.to_string()
    }
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("data:") || reference.contains("://")
}
