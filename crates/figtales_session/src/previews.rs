//! Registry of live preview handles.

use figtales_core::PreviewHandle;
use std::collections::HashSet;

/// Tracks which preview handles are currently valid.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashSet<PreviewHandle>,
}

impl PreviewRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh live handle.
    pub fn issue(&mut self) -> PreviewHandle {
        let handle = PreviewHandle::new();
        self.live.insert(handle.clone());
        handle
    }

    /// Invalidate `handle`. Returns whether it was live.
    pub fn release(&mut self, handle: &PreviewHandle) -> bool {
        self.live.remove(handle)
    }

    /// Invalidate every handle.
    pub fn release_all(&mut self) {
        self.live.clear();
    }

    /// Whether `handle` is still valid.
    pub fn is_live(&self, handle: &PreviewHandle) -> bool {
        self.live.contains(handle)
    }
}
