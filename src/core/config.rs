//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chawen/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::lang::Lang;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChawenConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub quick_questions: Vec<QuickQuestion>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub base_url: Option<String>,
    pub lang: Option<Lang>,
}

/// One predefined question, bound to Alt+1…9 in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuickQuestion {
    pub zh: String,
    pub en: Option<String>,
}

impl QuickQuestion {
    pub fn text(&self, lang: Lang) -> &str {
        match lang {
            Lang::Zh => &self.zh,
            Lang::En => self.en.as_deref().unwrap_or(&self.zh),
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

/// Where the backend serves `/api/qa` when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

pub fn default_quick_questions() -> Vec<QuickQuestion> {
    fn qq(zh: &str, en: &str) -> QuickQuestion {
        QuickQuestion {
            zh: zh.to_string(),
            en: Some(en.to_string()),
        }
    }
    vec![
        qq("金银花茶有什么功效？", "What is honeysuckle tea good for?"),
        qq("生姜茶有什么功效？", "What is ginger tea good for?"),
        qq("夏季适合喝什么代茶饮？", "Which herbal teas suit the summer?"),
        qq(
            "我最近有点上火，喝什么代茶饮好？",
            "I have some internal heat lately, which tea would help?",
        ),
        qq("清热解毒的代茶饮有哪些？", "Which herbal teas clear heat and detoxify?"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub lang: Lang,
    pub quick_questions: Vec<QuickQuestion>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.chawen/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chawen").join("config.toml"))
}

/// Load config from `~/.chawen/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChawenConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChawenConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChawenConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ChawenConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ChawenConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Chawen Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# base_url = "http://localhost:8001"   # Or set CHAWEN_BASE_URL env var
# lang = "zh"                          # "zh" or "en"; CHAWEN_LANG also works

# Listing any [[quick_questions]] replaces the built-in set (Alt+1…9).
# `en` is optional; the Chinese text is shown when it is missing.

# [[quick_questions]]
# zh = "金银花茶有什么功效？"
# en = "What is honeysuckle tea good for?"

# [[quick_questions]]
# zh = "清热解毒的代茶饮有哪些？"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` and `cli_lang` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ChawenConfig,
    cli_base_url: Option<&str>,
    cli_lang: Option<Lang>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("CHAWEN_BASE_URL").ok())
        .or_else(|| config.general.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Language: CLI → env → config → default
    let lang = cli_lang
        .or_else(|| std::env::var("CHAWEN_LANG").ok().and_then(|v| parse_lang(&v)))
        .or(config.general.lang)
        .unwrap_or_default();

    // Quick questions: a non-empty config list replaces the built-ins
    let quick_questions = if config.quick_questions.is_empty() {
        default_quick_questions()
    } else {
        config.quick_questions.clone()
    };

    ResolvedConfig {
        base_url,
        lang,
        quick_questions,
    }
}

fn parse_lang(value: &str) -> Option<Lang> {
    match value.trim().to_ascii_lowercase().as_str() {
        "zh" => Some(Lang::Zh),
        "en" => Some(Lang::En),
        other => {
            warn!("Unrecognized CHAWEN_LANG value: {}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ChawenConfig::default();
        assert!(config.quick_questions.is_empty());
        assert!(config.general.base_url.is_none());
        assert!(config.general.lang.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ChawenConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.lang, Lang::Zh);
        assert_eq!(resolved.quick_questions, default_quick_questions());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ChawenConfig {
            general: GeneralConfig {
                base_url: Some("http://qa.internal:9000".to_string()),
                lang: Some(Lang::En),
            },
            quick_questions: vec![QuickQuestion {
                zh: "桂花茶适合谁喝？".to_string(),
                en: None,
            }],
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://qa.internal:9000");
        assert_eq!(resolved.lang, Lang::En);
        assert_eq!(resolved.quick_questions.len(), 1);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ChawenConfig {
            general: GeneralConfig {
                base_url: Some("http://from-config:8001".to_string()),
                lang: Some(Lang::Zh),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli:8001"), Some(Lang::En));
        assert_eq!(resolved.base_url, "http://from-cli:8001");
        assert_eq!(resolved.lang, Lang::En);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
base_url = "http://192.168.1.50:8001"
lang = "en"

[[quick_questions]]
zh = "金银花茶有什么功效？"
en = "What is honeysuckle tea good for?"

[[quick_questions]]
zh = "清热解毒的代茶饮有哪些？"
"#;
        let config: ChawenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.base_url.as_deref(),
            Some("http://192.168.1.50:8001")
        );
        assert_eq!(config.general.lang, Some(Lang::En));
        assert_eq!(config.quick_questions.len(), 2);
        assert_eq!(config.quick_questions[0].zh, "金银花茶有什么功效？");
        assert_eq!(config.quick_questions[1].en, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
base_url = "http://localhost:9999"
"#;
        let config: ChawenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.base_url.as_deref(), Some("http://localhost:9999"));
        assert!(config.general.lang.is_none());
        assert!(config.quick_questions.is_empty());
    }

    #[test]
    fn test_quick_question_text_falls_back_to_zh() {
        let q = QuickQuestion {
            zh: "桂花茶适合谁喝？".to_string(),
            en: None,
        };
        assert_eq!(q.text(Lang::Zh), "桂花茶适合谁喝？");
        assert_eq!(q.text(Lang::En), "桂花茶适合谁喝？");
    }

    #[test]
    fn test_default_quick_questions_are_bilingual() {
        let defaults = default_quick_questions();
        assert!(!defaults.is_empty());
        assert!(defaults.len() <= 9); // Alt+1…9 bindings
        for q in &defaults {
            assert!(!q.zh.is_empty());
            assert!(q.en.is_some());
        }
    }

    #[test]
    fn test_parse_lang_values() {
        assert_eq!(parse_lang("zh"), Some(Lang::Zh));
        assert_eq!(parse_lang(" EN "), Some(Lang::En));
        assert_eq!(parse_lang("fr"), None);
    }
}
