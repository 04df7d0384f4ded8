//! Transport encoding for design images.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const FALLBACK_MIME: &str = "image/jpeg";

/// A base64-encoded image ready to attach to a completion request.
///
/// # Examples
///
/// ```
/// use figtales_core::EncodedImage;
///
/// let image = EncodedImage::from_bytes("image/png", b"png-bytes");
/// let url = image.to_data_url();
/// assert!(url.starts_with("data:image/png;base64,"));
///
/// let parsed = EncodedImage::from_data_url(&url).unwrap();
/// assert_eq!(parsed, image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct EncodedImage {
    /// MIME type of the image
    mime_type: String,
    /// Base64 payload (standard alphabet, padded)
    data: String,
}

impl EncodedImage {
    /// Create from an already-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Render as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Parse a `data:{mime};base64,{data}` URL.
    ///
    /// A missing or empty mime type falls back to `image/jpeg`. Returns
    /// `None` when there is no comma separating header and payload or the
    /// payload is empty.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let (header, data) = url.split_once(',')?;
        if data.is_empty() {
            return None;
        }
        let mime = header
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .filter(|mime| !mime.is_empty())
            .unwrap_or(FALLBACK_MIME);
        Some(Self::new(mime, data))
    }
}
