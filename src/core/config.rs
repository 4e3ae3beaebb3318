//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub persona: PersonaConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PersonaConfig {
    pub name: Option<String>,
    pub headline_prefix: Option<String>,
    pub headline_words: Option<Vec<String>>,
    pub avatar_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BehaviorConfig {
    pub reply_delay_ms: Option<u64>,
    pub headline_interval_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PERSONA: &str = "Alex";
pub const DEFAULT_HEADLINE_PREFIX: &str = "I build lovable";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
pub const DEFAULT_HEADLINE_INTERVAL_MS: u64 = 3000;

pub fn default_headline_words() -> Vec<String> {
    ["apps", "AI tools", "web apps", "Chrome extensions", "side projects", "experiences"]
        .into_iter()
        .map(String::from)
        .collect()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub persona: String,
    pub headline_prefix: String,
    pub headline_words: Vec<String>,
    /// Custom avatar art file, already joined to `~/.folio/` when relative.
    pub avatar_file: Option<PathBuf>,
    pub reply_delay: Duration,
    pub headline_interval: Duration,
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

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Folio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [persona]
# name = "Alex"
# headline_prefix = "I build lovable"
# headline_words = ["apps", "AI tools", "web apps", "Chrome extensions", "side projects", "experiences"]
# avatar_file = "avatar.txt"         # ASCII art, path relative to ~/.folio/

# [behavior]
# reply_delay_ms = 1500              # Simulated typing time before a reply lands
# headline_interval_ms = 3000        # How long each headline word is shown
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
/// `cli_reply_delay_ms` comes from the `--reply-delay-ms` flag (None = not
/// specified).
pub fn resolve(config: &FolioConfig, cli_reply_delay_ms: Option<u64>) -> ResolvedConfig {
    // Persona name: env → config → default
    let persona = std::env::var("FOLIO_PERSONA")
        .ok()
        .or_else(|| config.persona.name.clone())
        .unwrap_or_else(|| DEFAULT_PERSONA.to_string());

    let headline_prefix = config
        .persona
        .headline_prefix
        .clone()
        .unwrap_or_else(|| DEFAULT_HEADLINE_PREFIX.to_string());

    // An explicitly empty word list would freeze the headline, so treat it
    // as unset.
    let headline_words = match config.persona.headline_words.clone() {
        Some(words) if !words.is_empty() => words,
        _ => default_headline_words(),
    };

    let avatar_file = config.persona.avatar_file.as_ref().map(|file| {
        let path = PathBuf::from(file);
        if path.is_absolute() {
            path
        } else {
            match dirs::home_dir() {
                Some(home) => home.join(".folio").join(file),
                None => path,
            }
        }
    });

    // Reply delay: CLI → env → config → default
    let reply_delay_ms = cli_reply_delay_ms
        .or_else(|| parse_env_ms("FOLIO_REPLY_DELAY_MS"))
        .or(config.behavior.reply_delay_ms)
        .unwrap_or(DEFAULT_REPLY_DELAY_MS);

    let headline_interval_ms = config
        .behavior
        .headline_interval_ms
        .unwrap_or(DEFAULT_HEADLINE_INTERVAL_MS);

    ResolvedConfig {
        persona,
        headline_prefix,
        headline_words,
        avatar_file,
        reply_delay: Duration::from_millis(reply_delay_ms),
        headline_interval: Duration::from_millis(headline_interval_ms),
    }
}

/// Reads a millisecond value from an env var, warning on junk instead of
/// failing startup.
fn parse_env_ms(var: &str) -> Option<u64> {
    let raw = std::env::var(var).ok()?;
    match raw.parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(_) => {
            warn!("Ignoring {var}={raw}: not a millisecond count");
            None
        }
    }
}
