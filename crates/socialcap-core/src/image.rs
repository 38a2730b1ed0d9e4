//! Image loading and validation before upload.
//!
//! Reads an image file, checks its size against the configured limit and its
//! magic bytes against known formats, and produces an [`ImagePayload`]. The
//! MIME type comes from the file header, not its extension.

use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::ImageError;
use crate::types::ImagePayload;

/// Loads image files into base64 payloads.
pub struct ImageLoader {
    max_bytes: u64,
    max_mb: u64,
}

impl ImageLoader {
    /// Create a new loader with the given limits.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            max_bytes: limits.max_image_size_mb.saturating_mul(1024 * 1024),
            max_mb: limits.max_image_size_mb,
        }
    }

    /// Read, validate and encode an image file.
    ///
    /// Checks:
    /// - File exists and is readable
    /// - File size is within limits
    /// - File has valid image magic bytes
    pub async fn load(&self, path: &Path) -> Result<ImagePayload, ImageError> {
        if !path.exists() {
            return Err(ImageError::FileNotFound(path.to_path_buf()));
        }

        let metadata = tokio::fs::metadata(path).await.map_err(|e| ImageError::Read {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {e}"),
        })?;

        if metadata.len() > self.max_bytes {
            return Err(ImageError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.max_mb,
            });
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| ImageError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if bytes.len() < 4 {
            return Err(ImageError::NotAnImage {
                path: path.to_path_buf(),
                message: "file too small to be a valid image".to_string(),
            });
        }

        let mime_type = sniff_mime_type(&bytes).ok_or_else(|| ImageError::NotAnImage {
            path: path.to_path_buf(),
            message: "unrecognized image format (invalid magic bytes)".to_string(),
        })?;

        tracing::debug!(
            "Loaded {:?} as {mime_type} ({} bytes)",
            path,
            bytes.len()
        );
        Ok(ImagePayload::from_bytes(&bytes, mime_type))
    }
}

/// Detect the image MIME type from its leading bytes.
pub fn sniff_mime_type(header: &[u8]) -> Option<&'static str> {
    match header {
        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        // PNG: 89 50 4E 47
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        // GIF: GIF8
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        // WebP: RIFF....WEBP
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        // BMP: BM
        [b'B', b'M', ..] => Some("image/bmp"),
        _ => None,
    }
}

/// Whether a MIME type string names an image.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.trim().to_ascii_lowercase().starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use std::io::Write;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    fn loader() -> ImageLoader {
        ImageLoader::new(&LimitsConfig::default())
    }

    #[test]
    fn test_sniff_known_formats() {
        assert_eq!(sniff_mime_type(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_mime_type(PNG_HEADER), Some("image/png"));
        assert_eq!(sniff_mime_type(b"GIF89a"), Some("image/gif"));
        assert_eq!(sniff_mime_type(b"RIFF\x24\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_mime_type(b"BM\x36\0\0\0"), Some("image/bmp"));
    }

    #[test]
    fn test_sniff_rejects_riff_without_webp() {
        assert_eq!(sniff_mime_type(b"RIFF\x24\0\0\0WAVE"), None);
        assert_eq!(sniff_mime_type(b"%PDF-1.7"), None);
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("Image/JPEG"));
        assert!(!is_image_mime("application/pdf"));
    }

    #[tokio::test]
    async fn test_load_png_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_HEADER).unwrap();

        let payload = loader().load(file.path()).await.unwrap();
        assert_eq!(payload.mime_type, "image/png");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&payload.data)
            .unwrap();
        assert_eq!(decoded, PNG_HEADER);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = loader()
            .load(Path::new("/nonexistent/path/ghost.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ImageError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_load_rejects_non_image() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"just some text, not pixels").unwrap();

        let err = loader().load(file.path()).await.unwrap_err();
        assert!(matches!(err, ImageError::NotAnImage { .. }));
        assert!(err.to_string().starts_with("Please upload a valid image file"));
    }

    #[tokio::test]
    async fn test_huge_size_limit_saturates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_HEADER).unwrap();

        let limits = LimitsConfig {
            max_image_size_mb: u64::MAX,
            ..LimitsConfig::default()
        };
        let loader = ImageLoader::new(&limits);
        assert_eq!(loader.max_bytes, u64::MAX);

        let payload = loader.load(file.path()).await.unwrap();
        assert_eq!(payload.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_load_rejects_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_HEADER).unwrap();
        file.write_all(&vec![0u8; 1024 * 1024 + 1]).unwrap();

        let limits = LimitsConfig {
            max_image_size_mb: 1,
            ..LimitsConfig::default()
        };
        let err = ImageLoader::new(&limits).load(file.path()).await.unwrap_err();
        assert!(matches!(err, ImageError::FileTooLarge { max_mb: 1, .. }));
    }
}
