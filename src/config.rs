//! YAML configuration for the memory-graph edge builder.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! edges:
//!   max_documents: 50
//!   min_similarity: 0.725
//!   doc_doc_hue: 200
//!   doc_memory_color: "rgba(148, 163, 184, 0.3)"
//!   use_parallel: true
//!   selected_space: "all"
//!   memory_limit: 20
//! ```
//!
//! Every field of `edges` is optional and falls back to the dashboard
//! defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Edge builder settings
    #[serde(default)]
    pub edges: EdgeConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            edges: EdgeConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: GraphConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.edges.validate()
    }
}

/// Settings for [`build_graph_edges`](crate::build_graph_edges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Only the first `max_documents` documents take part in the pairwise
    /// doc-doc pass, which is quadratic in this number.
    #[serde(default = "EdgeConfig::default_max_documents")]
    pub max_documents: usize,

    /// A doc-doc edge is emitted only when similarity is strictly greater
    /// than this.
    #[serde(default = "EdgeConfig::default_min_similarity")]
    pub min_similarity: f64,

    /// Hue passed to [`connection_color`](crate::connection_color) for
    /// doc-doc edges.
    #[serde(default = "EdgeConfig::default_doc_doc_hue")]
    pub doc_doc_hue: u16,

    /// Fixed color for doc-memory edges.
    #[serde(default = "EdgeConfig::default_doc_memory_color")]
    pub doc_memory_color: String,

    /// Score document pairs on the rayon pool. Ignored without the
    /// `parallel` feature.
    #[serde(default)]
    pub use_parallel: bool,

    /// Only memories in this space are drawn. `"all"` disables the filter.
    #[serde(default = "EdgeConfig::default_selected_space")]
    pub selected_space: String,

    /// Maximum memories drawn per document. Applies only when a specific
    /// space is selected; `None` or 0 means unlimited.
    #[serde(default)]
    pub memory_limit: Option<usize>,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            max_documents: Self::default_max_documents(),
            min_similarity: Self::default_min_similarity(),
            doc_doc_hue: Self::default_doc_doc_hue(),
            doc_memory_color: Self::default_doc_memory_color(),
            use_parallel: false,
            selected_space: Self::default_selected_space(),
            memory_limit: None,
        }
    }
}

impl EdgeConfig {
    pub(crate) fn default_max_documents() -> usize {
        50
    }

    pub(crate) fn default_min_similarity() -> f64 {
        0.725
    }

    pub(crate) fn default_doc_doc_hue() -> u16 {
        200
    }

    pub(crate) fn default_doc_memory_color() -> String {
        "rgba(148, 163, 184, 0.3)".to_string()
    }

    pub(crate) fn default_selected_space() -> String {
        crate::graph::ALL_SPACES.to_string()
    }

    pub fn with_max_documents(mut self, max_documents: usize) -> Self {
        self.max_documents = max_documents;
        self
    }

    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    pub fn with_doc_doc_hue(mut self, hue: u16) -> Self {
        self.doc_doc_hue = hue;
        self
    }

    pub fn with_doc_memory_color(mut self, color: impl Into<String>) -> Self {
        self.doc_memory_color = color.into();
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn with_selected_space(mut self, space: impl Into<String>) -> Self {
        self.selected_space = space.into();
        self
    }

    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = Some(limit);
        self
    }

    /// Validate edge settings.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !self.min_similarity.is_finite() {
            return Err(ConfigLoadError::Validation(
                "edges.min_similarity must be a finite number".into(),
            ));
        }
        if self.doc_doc_hue > 360 {
            return Err(ConfigLoadError::Validation(format!(
                "edges.doc_doc_hue must be within 0..=360, got {}",
                self.doc_doc_hue
            )));
        }
        if self.selected_space.is_empty() {
            return Err(ConfigLoadError::Validation(
                "edges.selected_space must not be empty".into(),
            ));
        }
        if self.doc_memory_color.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "edges.doc_memory_color must not be empty".into(),
            ));
        }
        Ok(())
    }
}
