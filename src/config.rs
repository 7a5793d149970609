use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::schema::ProblemSize;
use crate::session::ViewMode;
use crate::{DemoError, DemoResult};

/// Optional settings file, e.g.
///
/// ```toml
/// default_size = 20
/// view = "charts"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub default_size: ProblemSize,
    pub view: ViewMode,
    /// Fixes the delay jitter sequence
    pub seed: Option<u64>,
}

pub fn parse_config(s: &str) -> DemoResult<DemoConfig> {
    toml::from_str(s).map_err(|e| DemoError::Message(format!("invalid config: {e}")))
}

pub fn load_config(path: &Path) -> DemoResult<DemoConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg = parse_config("default_size = 20\nview = \"charts\"\nseed = 42\n").unwrap();
        assert_eq!(cfg.default_size, ProblemSize::N20);
        assert_eq!(cfg.view, ViewMode::Charts);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_unsupported_size_rejected() {
        let err = parse_config("default_size = 7").unwrap_err();
        assert!(err.to_string().contains("graph size 7"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/maxcut-demo.toml")).unwrap_err();
        assert!(matches!(err, DemoError::Anyhow(_)));
        assert!(format!("{err:#}").contains("failed to read /nonexistent/maxcut-demo.toml"));
    }
}
