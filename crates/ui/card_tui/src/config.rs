use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::warn;

#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// Presentation settings, `[ui]` table of the config file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop ticks per second.
    pub tick_rate: f64,
    /// Draw the card front/back next to the form.
    pub show_preview: bool,
    /// Show the CVC as bullets on the card back.
    pub mask_cvc: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: 4.0,
            show_preview: true,
            mask_cvc: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

const CONFIG_FILES: [(&str, config::FileFormat); 2] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.toml", config::FileFormat::Toml),
];

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(&get_config_dir(), &get_data_dir())
    }

    /// Layer defaults, `config.json5`, `config.toml` and `CARD_TUI_*`
    /// environment overrides (`CARD_TUI_UI__TICK_RATE=8`), in that order.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, config::ConfigError> {
        let ui = UiConfig::default();
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?
            .set_default("ui.tick_rate", ui.tick_rate)?
            .set_default("ui.show_preview", ui.show_preview)?
            .set_default("ui.mask_cvc", ui.mask_cvc)?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            warn!(dir = %config_dir.display(), "No configuration file found, using defaults");
        }

        builder = builder.add_source(
            config::Environment::with_prefix(&PROJECT_NAME)
                .prefix_separator("_")
                .separator("__"),
        );

        builder.build()?.try_deserialize()
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "cardform", env!("CARGO_PKG_NAME"))
}
