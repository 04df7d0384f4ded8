//! Shareable links to a story collection.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A link others can open to view a shared story collection.
///
/// # Examples
///
/// ```
/// use figtales_core::ShareLink;
///
/// let link = ShareLink::new("https://figtales.app/", "abc123");
/// assert_eq!(link.url(), "https://figtales.app/share/abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ShareLink {
    id: String,
    url: String,
}

impl ShareLink {
    /// Link for share `id` under `origin`. A trailing slash on the origin is ignored.
    pub fn new(origin: &str, id: impl Into<String>) -> Self {
        let id = id.into();
        let url = format!("{}/share/{}", origin.trim_end_matches('/'), id);
        Self { id, url }
    }
}
