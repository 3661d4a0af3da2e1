//! Shared types used across distplan crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker written in place of a node name when a file could not be placed.
pub const DEFAULT_UNASSIGNED_MARKER: &str = "NULL";

/// One `<name> <size>` line from an input list.
///
/// The same shape describes a file (size in bytes) and a node (capacity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub size: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Final placement of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub file: String,
    /// Node that received the file, `None` when nothing had room.
    pub node: Option<String>,
}

impl AssignmentRecord {
    /// Render as `"<file> <node-or-marker>"`.
    pub fn to_line(&self, unassigned_marker: &str) -> String {
        let node = self.node.as_deref().unwrap_or(unassigned_marker);
        format!("{} {}", self.file, node)
    }
}

/// Load of a node once allocation has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeUsage {
    pub name: String,
    pub capacity: u64,
    pub occupied: u64,
    pub free: u64,
}

/// How the assignment is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<file> <node>` line per file.
    #[default]
    Text,
    /// A JSON array of [`AssignmentRecord`].
    Json,
}

#[derive(Debug, Error)]
#[error("unknown output format: {0} (expected `text` or `json`)")]
pub struct UnknownFormat(pub String);

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, UnknownFormat> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(value.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
