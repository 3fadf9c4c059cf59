// src/config.rs
use serde::Serialize;

/// How repeated k-mers become edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// One edge per distinct k-mer; repeats only raise its multiplicity.
    #[default]
    Collapsed,
    /// One edge per k-mer occurrence.
    Multigraph,
}

/// Parameters of a single assembly run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyConfig {
    /// k-mer length; graph nodes are (k-1)-mers.
    pub k: usize,
    pub edge_mode: EdgeMode,
    /// Assemble each connected component on its own. When disabled a graph
    /// with more than one component cannot be assembled.
    pub split_components: bool,
}

impl AssemblyConfig {
    pub fn new(k: usize) -> Self {
        AssemblyConfig {
            k,
            edge_mode: EdgeMode::default(),
            split_components: true,
        }
    }

    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> Self {
        self.edge_mode = edge_mode;
        self
    }

    pub fn with_split_components(mut self, split_components: bool) -> Self {
        self.split_components = split_components;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssemblyConfig::new(31);
        assert_eq!(config.k, 31);
        assert_eq!(config.edge_mode, EdgeMode::Collapsed);
        assert!(config.split_components);
    }

    #[test]
    fn test_serializes_lowercase_mode() {
        let config = AssemblyConfig::new(5).with_edge_mode(EdgeMode::Multigraph);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"k":5,"edge_mode":"multigraph","split_components":true}"#);
    }
}
