use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::command::DEFAULT_EMBED_BASE;
use crate::display::SurfaceKind;

const DEFAULT_PORT: u16 = 8080;

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub localhost: Option<bool>,
    pub embed_base: Option<String>,
    pub surface: Option<SurfaceKind>,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub localhost: bool,
    pub embed_base: String,
    pub surface: SurfaceKind,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            localhost: args.localhost || file.localhost.unwrap_or(false),
            embed_base: args
                .embed_base
                .clone()
                .or(file.embed_base)
                .unwrap_or_else(|| DEFAULT_EMBED_BASE.to_string()),
            surface: args.surface.or(file.surface).unwrap_or_default(),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("vidremote.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("vidremote").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
