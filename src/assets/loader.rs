use std::{
    collections::HashMap,
    future::Future,
    path::{Path, PathBuf},
};

use crate::{
    assets::decode::{DecodedImage, decode_image, decode_svg},
    foundation::error::{GraphicsError, GraphicsResult},
};

/// Asynchronous image decode service.
///
/// Implementations must fail when the source is unreachable or undecodable; the
/// renderers abort on the first failure.
pub trait ImageLoader {
    fn decode(&self, source: &str) -> impl Future<Output = GraphicsResult<DecodedImage>>;
}

impl<T: ImageLoader> ImageLoader for &T {
    fn decode(&self, source: &str) -> impl Future<Output = GraphicsResult<DecodedImage>> {
        (**self).decode(source)
    }
}

/// Normalize and validate root-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> GraphicsResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(GraphicsError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(GraphicsError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(GraphicsError::validation(
                "asset paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(GraphicsError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Loads images from files below a root directory.
#[derive(Clone, Debug)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn decode_blocking(&self, source: &str) -> GraphicsResult<DecodedImage> {
        let norm = normalize_rel_path(source)?;
        let path = self.root.join(Path::new(&norm));
        let bytes = std::fs::read(&path).map_err(|e| {
            GraphicsError::resource(format!("failed to read image '{}': {e}", path.display()))
        })?;

        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        let decoded = if is_svg {
            decode_svg(&bytes)
        } else {
            decode_image(&bytes)
        };
        decoded.map_err(|e| GraphicsError::resource(format!("failed to decode '{norm}': {e}")))
    }
}

impl ImageLoader for FsImageLoader {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn decode(&self, source: &str) -> GraphicsResult<DecodedImage> {
        let img = self.decode_blocking(source)?;
        tracing::debug!(width = img.width, height = img.height, "decoded image");
        Ok(img)
    }
}

/// In-memory image service keyed by source string.
#[derive(Clone, Debug, Default)]
pub struct MemoryImageLoader {
    images: HashMap<String, DecodedImage>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, image: DecodedImage) -> &mut Self {
        self.images.insert(source.into(), image);
        self
    }

    pub fn with(mut self, source: impl Into<String>, image: DecodedImage) -> Self {
        self.insert(source, image);
        self
    }
}

impl ImageLoader for MemoryImageLoader {
    async fn decode(&self, source: &str) -> GraphicsResult<DecodedImage> {
        self.images
            .get(source)
            .cloned()
            .ok_or_else(|| GraphicsError::resource(format!("image '{source}' not found")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
