use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Opaque reference to an image the app can display and composite.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    /// File returned by a native picker
    File(PathBuf),
    /// Asset compiled into the binary (placeholder, sticker catalog)
    Embedded {
        name: &'static str,
        bytes: &'static [u8],
    },
    /// Bytes handed over by a browser file dialog
    Memory { name: String, bytes: Arc<[u8]> },
}

impl ImageRef {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageRef::File(path.into())
    }

    /// Short human readable name, used for logging and alt texts
    pub fn name(&self) -> String {
        match self {
            ImageRef::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string()),
            ImageRef::Embedded { name, .. } => name.to_string(),
            ImageRef::Memory { name, .. } => name.clone(),
        }
    }

    /// Reads the referenced bytes. Only file references touch the disk.
    pub fn load_bytes(&self) -> std::io::Result<Vec<u8>> {
        match self {
            ImageRef::File(path) => std::fs::read(path),
            ImageRef::Embedded { bytes, .. } => Ok(bytes.to_vec()),
            ImageRef::Memory { bytes, .. } => Ok(bytes.to_vec()),
        }
    }

    /// MIME type guessed from the file extension of the name
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageRef::File(path) => guess_mime_from_ext(path),
            ImageRef::Embedded { name, .. } => guess_mime_from_ext(Path::new(name)),
            ImageRef::Memory { name, .. } => guess_mime_from_ext(Path::new(name)),
        }
    }
}

/// Guesses the MIME type from the file extension
pub fn guess_mime_from_ext(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}

/// Encoding used for the exported composite
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Where a composite ended up after saving
#[derive(Debug, Clone, PartialEq)]
pub struct SavedImage {
    /// Content URI on Android, absolute file path elsewhere
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_guess() {
        assert_eq!(guess_mime_from_ext(Path::new("a.PNG")), "image/png");
        assert_eq!(guess_mime_from_ext(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(guess_mime_from_ext(Path::new("a.webp")), "image/webp");
        assert_eq!(guess_mime_from_ext(Path::new("noext")), "image/jpeg");
    }

    #[test]
    fn test_image_ref_name() {
        let r = ImageRef::file("/tmp/photos/holiday.jpg");
        assert_eq!(r.name(), "holiday.jpg");

        let e = ImageRef::Embedded {
            name: "emoji1.png",
            bytes: &[1, 2, 3],
        };
        assert_eq!(e.name(), "emoji1.png");
        assert_eq!(e.mime_type(), "image/png");
        assert_eq!(e.load_bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_memory_ref_equality() {
        let bytes: Arc<[u8]> = Arc::from(vec![9u8, 8, 7]);
        let a = ImageRef::Memory {
            name: "upload.webp".to_string(),
            bytes: bytes.clone(),
        };
        let b = ImageRef::Memory {
            name: "upload.webp".to_string(),
            bytes,
        };
        assert_eq!(a, b);
        assert_eq!(a.mime_type(), "image/webp");
    }

    #[test]
    fn test_export_format_names() {
        assert_eq!(ExportFormat::default(), ExportFormat::Png);
        assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
    }
}
