//! Uploaded design files and their preview handles.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Transient token standing in for a rendered preview of a design file.
///
/// Handles are issued by the session store when a file enters it and are
/// released when the file leaves. They are never persisted.
///
/// # Examples
///
/// ```
/// use figtales_core::PreviewHandle;
///
/// let handle = PreviewHandle::new();
/// assert!(handle.as_str().starts_with("preview://"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}", _0)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    /// Issue a fresh, unique handle.
    pub fn new() -> Self {
        Self(format!("preview://{}", Uuid::new_v4()))
    }

    /// The handle as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PreviewHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// A design screenshot supplied by the user.
///
/// The raw payload is persisted base64-encoded so that a reloaded session can
/// still be sent for generation. When the payload is empty the file is read
/// from `source_path` at encoding time.
///
/// # Examples
///
/// ```
/// use figtales_core::DesignFile;
///
/// let file = DesignFile::new("login.png", "image/png", vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(file.name(), "login.png");
/// assert!(file.preview().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct DesignFile {
    /// Unique identifier
    id: Uuid,
    /// Original file name
    name: String,
    /// MIME type, e.g. "image/png"
    mime_type: String,
    /// Preview handle, present only while the file is owned by a session
    #[serde(skip)]
    preview: Option<PreviewHandle>,
    /// Raw file contents
    #[serde(with = "payload_base64", default)]
    payload: Vec<u8>,
    /// Where the file was read from, if it came from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_path: Option<PathBuf>,
}

impl DesignFile {
    /// Create a file from in-memory contents with a fresh id.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mime_type: mime_type.into(),
            preview: None,
            payload,
            source_path: None,
        }
    }

    /// Record the path this file was read from.
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Attach or clear the preview handle.
    pub fn set_preview(&mut self, preview: Option<PreviewHandle>) {
        self.preview = preview;
    }

    /// Detach the preview handle, returning it.
    pub fn take_preview(&mut self) -> Option<PreviewHandle> {
        self.preview.take()
    }

    /// Payload size in bytes.
    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

mod payload_base64 {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
