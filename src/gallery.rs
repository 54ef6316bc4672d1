use crate::errors::{GalleryError, Result};
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Number of works in the bundled portfolio.
pub const PORTFOLIO_SIZE: usize = 13;

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Ordered, immutable list of image locators shown by the carousel.
///
/// An `ImageSet` is never empty, so `len()` can be used directly as the
/// modulus for index arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    paths: Vec<PathBuf>,
}

impl ImageSet {
    /// The fixed portfolio layout: `<root>/image/1 (1).jpg` .. `1 (13).jpg`.
    ///
    /// Files are not checked here; a missing file shows up later as a
    /// failed load.
    pub fn portfolio(root: &Path) -> Self {
        let paths = (1..=PORTFOLIO_SIZE)
            .map(|k| root.join("image").join(format!("1 ({}).jpg", k)))
            .collect();
        Self { paths }
    }

    pub fn from_paths(paths: Vec<PathBuf>, origin: &Path) -> Result<Self> {
        if paths.is_empty() {
            return Err(GalleryError::EmptyGallery {
                path: origin.to_path_buf(),
            });
        }
        Ok(Self { paths })
    }

    /// Collects every supported image directly inside `dir`, in natural
    /// filename order.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| GalleryError::from_io(dir.to_path_buf(), e))?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_supported_image(path))
            .collect();

        paths.sort_by(|a, b| {
            let a_name = a.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default();
            let b_name = b.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default();
            natord::compare(&a_name, &b_name)
        });

        tracing::debug!(dir = %dir.display(), count = paths.len(), "scanned image directory");
        Self::from_paths(paths, dir)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// Key under which the bytes of image `index` live in the egui loader cache.
    pub fn uri(&self, index: usize) -> Option<String> {
        self.get(index).map(image_uri)
    }
}

pub fn image_uri(path: &Path) -> String {
    format!("bytes://{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_layout() {
        let set = ImageSet::portfolio(Path::new("/srv/site"));
        assert_eq!(set.len(), PORTFOLIO_SIZE);
        assert_eq!(set.get(0), Some(Path::new("/srv/site/image/1 (1).jpg")));
        assert_eq!(set.get(12), Some(Path::new("/srv/site/image/1 (13).jpg")));
        assert_eq!(set.get(13), None);
        assert_eq!(
            set.uri(1).as_deref(),
            Some("bytes:///srv/site/image/1 (2).jpg")
        );
    }

    #[test]
    fn test_scan_natural_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1 (10).jpg", "1 (2).JPG", "1 (1).jpg", "notes.txt", "1 (3).png"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let set = ImageSet::scan(dir.path()).unwrap();
        let names: Vec<String> = (0..set.len())
            .map(|i| set.get(i).unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["1 (1).jpg", "1 (2).JPG", "1 (3).png", "1 (10).jpg"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageSet::scan(dir.path()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_GALLERY");
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageSet::scan(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }
}
