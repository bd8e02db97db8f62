//! Vendor chunk classification.

use serde::{Deserialize, Serialize};

use crate::pattern::normalize;

/// Decides which modules belong in the vendor chunk.
///
/// A module is vendor when the marker fragment appears anywhere in its
/// context path. Pure and separator-insensitive, so the engine can apply it
/// per module without platform-specific results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkClassifier {
    pub vendor_marker: String,
}

impl Default for ChunkClassifier {
    fn default() -> Self {
        Self {
            vendor_marker: "node_modules".to_string(),
        }
    }
}

impl ChunkClassifier {
    pub fn new(vendor_marker: impl Into<String>) -> Self {
        Self {
            vendor_marker: vendor_marker.into(),
        }
    }

    /// Whether the module at `context` belongs in the vendor chunk.
    pub fn is_vendor(&self, context: &str) -> bool {
        normalize(context).contains(self.vendor_marker.as_str())
    }
}
