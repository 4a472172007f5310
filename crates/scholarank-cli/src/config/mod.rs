//! Scoring configuration loading.
//! Reads the file given by `--config`, else the path in SCHOLARANK_CONFIG,
//! else falls back to the built-in defaults.

use anyhow::Context;
use scholarank_ranker::ScoreConfig;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SCHOLARANK_CONFIG";

/// On-disk config encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// The explicit path wins; an empty env var counts as unset.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var(CONFIG_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    })
}

/// Parse config text; fields missing from it keep their defaults.
pub fn parse_score_config(content: &str, format: ConfigFormat) -> anyhow::Result<ScoreConfig> {
    let cfg: ScoreConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Load and validate the scoring config.
pub fn load_score_config(explicit: Option<&Path>) -> anyhow::Result<ScoreConfig> {
    let Some(path) = resolve_config_path(explicit) else {
        tracing::debug!("No scoring config given; using built-in defaults");
        return Ok(ScoreConfig::default());
    };

    if !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = parse_score_config(&content, ConfigFormat::from_path(&path))
        .with_context(|| format!("invalid config {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        policy = ?cfg.relevance.policy,
        keywords = cfg.keywords.len() + cfg.topic_keywords.len(),
        "Scoring config loaded"
    );
    Ok(cfg)
}
