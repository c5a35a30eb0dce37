//! Configuration loading.
//!
//! Loads a TOML file from `--config`, from `GRAPH_SNAPSHOT_CONFIG`, or from
//! `graph-snapshot.toml` in the current directory, falling back to defaults:
//!
//! ```toml
//! [compile]
//! scale_total = 0.8
//! texmode = "math"
//!
//! [compile.graph_options]
//! overlap = "false"
//!
//! [tools]
//! dot2tex = "/usr/local/bin/dot2tex"
//! neato = "/usr/local/bin/neato"
//! ```

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::options::CompileOptions;
use crate::render::ExternalTools;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub compile: CompileOptions,
    pub tools: ExternalTools,
}

impl Config {
    pub const ENV_CONFIG_PATH: &'static str = "GRAPH_SNAPSHOT_CONFIG";
    pub const DEFAULT_CONFIG_FILENAME: &'static str = "graph-snapshot.toml";

    /// Load from the explicit path if given, otherwise from the resolved default path.
    ///
    /// An explicit or environment path must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        if let Ok(path) = std::env::var(Self::ENV_CONFIG_PATH) {
            return Self::load_from_path(Path::new(&path));
        }

        let path = PathBuf::from(Self::DEFAULT_CONFIG_FILENAME);
        if !path.exists() {
            info!("no {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        Self::parse(&contents).map_err(|e| match e {
            Error::Config(message) => Error::Config(format!("{}: {message}", path.display())),
            other => other,
        })
    }

    /// Parse configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;

        config.compile.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TexMode;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse() {
        let config = Config::parse(
            r#"
            [compile]
            scale_total = 0.8
            len_as_label = false
            texmode = "verbatim"

            [compile.graph_options]
            overlap = "false"
            splines = "true"

            [tools]
            dot2tex = "/opt/dot2tex"
            neato = "/opt/graphviz/bin/neato"
            "#,
        )
        .unwrap();

        assert_eq!(config.compile.scale_total, 0.8);
        assert!(!config.compile.len_as_label);
        assert!(config.compile.tikz_edge_labels);
        assert_eq!(config.compile.texmode, TexMode::Verbatim);
        assert_eq!(config.compile.graph_options.overlap.as_deref(), Some("false"));
        assert_eq!(config.compile.graph_options.splines.as_deref(), Some("true"));
        assert_eq!(config.tools.dot2tex, PathBuf::from("/opt/dot2tex"));
        assert_eq!(config.tools.neato, PathBuf::from("/opt/graphviz/bin/neato"));
    }

    #[test]
    fn test_parse_rejects_unknown_graph_option() {
        let result = Config::parse(
            r#"
            [compile.graph_options]
            rankdir = "LR"
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_texmode() {
        let result = Config::parse("[compile]\ntexmode = \"latex\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_rejects_bad_scale() {
        let result = Config::parse("[compile]\nscale_total = -1.0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[compile]\nsvg_preview = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.compile.svg_preview);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_from_env_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("env.toml");
        std::fs::write(&path, "[tools]\nneato = \"/opt/neato\"\n").unwrap();

        std::env::set_var(Config::ENV_CONFIG_PATH, &path);
        let loaded = Config::load(None);
        std::env::set_var(Config::ENV_CONFIG_PATH, dir.path().join("missing.toml"));
        let missing = Config::load(None);
        std::env::remove_var(Config::ENV_CONFIG_PATH);

        assert_eq!(loaded.unwrap().tools.neato, PathBuf::from("/opt/neato"));
        assert!(matches!(missing, Err(Error::Io { .. })));
    }
}
