//! distplan.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::{DEFAULT_UNASSIGNED_MARKER, OutputFormat};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistplanConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// List of files to distribute.
    pub files: Option<PathBuf>,
    /// List of nodes that receive them.
    pub nodes: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination file; standard output when absent.
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub unassigned_marker: Option<String>,
    pub summary: Option<bool>,
}

impl DistplanConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DistplanConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scaffold a config pointing at the given input lists.
    pub fn scaffold(files: &str, nodes: &str) -> Self {
        DistplanConfig {
            input: Some(InputConfig {
                files: Some(PathBuf::from(files)),
                nodes: Some(PathBuf::from(nodes)),
            }),
            output: Some(OutputConfig {
                path: None,
                format: Some(OutputFormat::Text),
                unassigned_marker: Some(DEFAULT_UNASSIGNED_MARKER.to_string()),
                summary: Some(false),
            }),
        }
    }

    pub fn files(&self) -> Option<&Path> {
        self.input.as_ref()?.files.as_deref()
    }

    pub fn nodes(&self) -> Option<&Path> {
        self.input.as_ref()?.nodes.as_deref()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_ref()?.path.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn unassigned_marker(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.unassigned_marker.as_deref())
            .unwrap_or(DEFAULT_UNASSIGNED_MARKER)
    }

    pub fn summary(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.summary)
            .unwrap_or(false)
    }
}
