//! Annotation metadata.
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use super::types::AnnotationMetadata;

/// Name of the tool chain that produced the annotations.
pub const TOOL_NAME: &str = "Annotated Gigaword Pipeline";

/// Corpus name used in communication GUIDs.
pub const CORPUS_NAME: &str = "Annotated Gigaword";

/// Hands out [AnnotationMetadata] sharing the same tool name and annotation time.
///
/// The timestamp is taken once, so that every record of a run carries the same one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFactory {
    tool: String,
    timestamp: i64,
}

impl MetadataFactory {
    pub fn new(tool: &str, timestamp: i64) -> Self {
        Self {
            tool: tool.to_string(),
            timestamp,
        }
    }

    /// Create a factory stamped with the current time (seconds since epoch).
    pub fn now(tool: &str) -> Self {
        let timestamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => {
                warn!("system clock is before unix epoch: {}", e);
                0
            }
        };
        Self::new(tool, timestamp)
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Metadata with the bare tool name.
    pub fn metadata(&self) -> AnnotationMetadata {
        AnnotationMetadata {
            tool: self.tool.clone(),
            timestamp: self.timestamp,
            confidence: 1f32,
        }
    }

    /// Metadata whose tool name is suffixed with `suffix` (typically a component and its reference).
    pub fn with_suffix(&self, suffix: &str) -> AnnotationMetadata {
        AnnotationMetadata {
            tool: format!("{}{}", self.tool, suffix),
            ..self.metadata()
        }
    }
}

impl Default for MetadataFactory {
    fn default() -> Self {
        Self::now(TOOL_NAME)
    }
}
