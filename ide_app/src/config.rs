//! IDE configuration

use serde::{Deserialize, Serialize};

use scene_ui::config::{Config, UIConfig};

/// One editor kind and the file extensions it opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorEntry {
    /// Display name
    pub name: String,
    /// Extensions handled, without the leading dot
    pub extensions: Vec<String>,
    /// Open files read-only
    #[serde(default)]
    pub read_only: bool,
}

impl EditorEntry {
    fn new(name: &str, extensions: &[&str], read_only: bool) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| (*e).to_string()).collect(),
            read_only,
        }
    }
}

/// Application configuration, loaded from `ide.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeConfig {
    /// Widget tree settings
    pub ui: UIConfig,
    /// Editor table, searched in order
    pub editors: Vec<EditorEntry>,
    /// Window size in pixels
    pub window_size: (u32, u32),
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            ui: UIConfig::default(),
            editors: vec![
                EditorEntry::new("text", &["txt", "lua", "xml", "json", "toml"], false),
                EditorEntry::new("image", &["png"], true),
            ],
            window_size: (1100, 700),
        }
    }
}

impl Config for IdeConfig {}
