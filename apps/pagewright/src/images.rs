use log::debug;
use log::warn;
use pw_layout::ImageResolver;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Looks `img` sources up below one directory.
#[derive(Debug, Clone)]
pub struct DirectoryImages {
    root: PathBuf,
}

impl DirectoryImages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path for `src`, or `None` when it is a URL or escapes the root.
    pub fn path_for(&self, src: &str) -> Option<PathBuf> {
        if src.contains("://") || src.starts_with("data:") {
            return None;
        }
        let relative = Path::new(src.split(['?', '#']).next().unwrap_or_default());
        let stays_inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !stays_inside || relative.as_os_str().is_empty() {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ImageResolver for DirectoryImages {
    fn resolve(&self, src: &str) -> Option<Vec<u8>> {
        let Some(path) = self.path_for(src) else {
            debug!("image `{src}` is not a local relative path");
            return None;
        };
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                warn!("failed to read image {}: {error}", path.display());
                None
            }
        }
    }
}
