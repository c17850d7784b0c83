//! Viewer identity and the per-call session object.

use std::fmt;

/// Identifier of an authenticated viewer.
///
/// Used both as the value stored in the request scope and as the key
/// submitted to the batching loader, so it needs `Eq + Hash + Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewerId(String);

impl ViewerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ViewerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Ephemeral session accompanying one inbound request.
///
/// Built per call and discarded after; the viewer id is its only attribute
/// relevant to resolution.
#[derive(Debug, Clone)]
pub struct Session {
    viewer_id: ViewerId,
}

impl Session {
    pub fn new(viewer_id: impl Into<ViewerId>) -> Self {
        Self {
            viewer_id: viewer_id.into(),
        }
    }

    pub fn viewer_id(&self) -> &ViewerId {
        &self.viewer_id
    }
}
