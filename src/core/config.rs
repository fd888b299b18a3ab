//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.triptych/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Triptych runs fine with no config at all.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TriptychConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Entries for the choice list. Fixed for the lifetime of the program.
    pub choices: Option<Vec<String>>,
    /// Text shown in the static sidebar.
    pub sidebar_text: Option<String>,
    /// File to load into the content pane, relative to `~/.triptych/`.
    pub content_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CHOICES: [&str; 3] = ["Option A", "Option B", "Option C"];
pub const DEFAULT_SIDEBAR_TEXT: &str = "lorem ipsum";
pub const DEFAULT_CONTENT_LABEL: &str = "Your scrollable content here...";
pub const DEFAULT_FILLER_LINES: usize = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub choices: Vec<String>,
    pub sidebar_text: String,
    /// Content pane lines, already loaded.
    pub content: Vec<String>,
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

/// Returns the path to `~/.triptych/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".triptych").join("config.toml"))
}

/// Load config from `~/.triptych/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TriptychConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TriptychConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TriptychConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TriptychConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TriptychConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Triptych Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [ui]
# choices = ["Option A", "Option B", "Option C"]
# sidebar_text = "lorem ipsum"
# content_file = "notes.txt"   # Path relative to ~/.triptych/
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

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_content` is the `--content` flag (None = not specified).
pub fn resolve(config: &TriptychConfig, cli_content: Option<&Path>) -> ResolvedConfig {
    let choices = config
        .ui
        .choices
        .clone()
        .unwrap_or_else(|| DEFAULT_CHOICES.iter().map(|s| s.to_string()).collect());

    let sidebar_text = config
        .ui
        .sidebar_text
        .clone()
        .unwrap_or_else(|| DEFAULT_SIDEBAR_TEXT.to_string());

    let content = resolve_content(config, cli_content);

    ResolvedConfig {
        choices,
        sidebar_text,
        content,
    }
}

/// Resolves the content pane lines: CLI file wins over config file,
/// both win over the built-in filler.
fn resolve_content(config: &TriptychConfig, cli_content: Option<&Path>) -> Vec<String> {
    if let Some(path) = cli_content {
        match read_content_file(path) {
            Some(lines) => return lines,
            None => warn!("Falling back past --content {}", path.display()),
        }
    }

    // Config content_file is relative to ~/.triptych/
    if let Some(ref file) = config.ui.content_file {
        if let Some(home) = dirs::home_dir() {
            let content_path = home.join(".triptych").join(file);
            if let Some(lines) = read_content_file(&content_path) {
                return lines;
            }
        }
    }

    default_content()
}

fn read_content_file(path: &Path) -> Option<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let lines: Vec<String> = contents.lines().map(|l| l.to_string()).collect();
            if lines.is_empty() {
                warn!("Content file is empty: {}", path.display());
                return None;
            }
            info!("Loaded {} content lines from {}", lines.len(), path.display());
            Some(lines)
        }
        Err(e) => {
            warn!("Failed to read content file {}: {}", path.display(), e);
            None
        }
    }
}

/// A label line followed by repeated filler, enough to make scrolling visible.
pub fn default_content() -> Vec<String> {
    let mut lines = Vec::with_capacity(DEFAULT_FILLER_LINES + 1);
    lines.push(DEFAULT_CONTENT_LABEL.to_string());
    for _ in 0..DEFAULT_FILLER_LINES {
        lines.push("Line".to_string());
    }
    lines
}
