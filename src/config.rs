use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;

/// Locations of the external alignment and tree-building executables.
/// Explicit configuration, no path scanning.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_aligner")]
    pub aligner: String,
    #[serde(default = "default_tree_builder")]
    pub tree_builder: String,
}

fn default_aligner() -> String {
    "mafft".to_string()
}

fn default_tree_builder() -> String {
    "FastTree".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aligner: default_aligner(),
            tree_builder: default_tree_builder(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("org", "operon-tools", "operon-tools") {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }
}
