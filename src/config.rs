use std::path::{Path, PathBuf};

use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::DIMENSION_COUNT;
use crate::data::{demo_dimensions, Dimension, DimensionData, CHECKLIST_LEN};
use crate::events::AppEvent;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DimensionConfig {
    pub dimension: Dimension,
    pub score: u8,
    pub description: Option<String>,
    pub checklist: Option<Vec<bool>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dimensions: Vec<DimensionConfig>,
}

impl Config {
    /// Resolves the config into the full score sheet. Dimensions the file
    /// does not mention keep the built-in demo data; scores are clamped on
    /// the way in.
    pub fn into_dimensions(self) -> [DimensionData; DIMENSION_COUNT] {
        let mut dims = demo_dimensions();
        for cfg in self.dimensions {
            let slot = &mut dims[cfg.dimension.as_index()];
            slot.set_score(cfg.score);
            if let Some(desc) = cfg.description {
                slot.description = desc;
            }
            if let Some(list) = cfg.checklist {
                for (i, v) in list.into_iter().take(CHECKLIST_LEN).enumerate() {
                    slot.checklist[i] = v;
                }
            }
        }
        dims
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "snowflake", "snowflake").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Resolves the effective config file path, honoring a CLI override.
pub fn resolve_config_path(override_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => get_config_path(),
    }
}

pub fn load_config(override_path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = resolve_config_path(override_path)?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("SNOWFLAKE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(override_path: Option<&Path>) -> Config {
    match load_config(override_path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to demo scores: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Watches the config file's directory and emits `ConfigReload` when the
/// file itself changes.
pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_parse_partial_config() {
        let cfg = parse(
            r#"
            [[dimensions]]
            dimension = "future"
            score = 2

            [[dimensions]]
            dimension = "Health"
            score = 9
            description = "custom"
            "#,
        );

        let dims = cfg.into_dimensions();
        assert_eq!(dims[Dimension::Future.as_index()].score, 2);
        // overlarge score clamped
        assert_eq!(dims[Dimension::Health.as_index()].score, 7);
        assert_eq!(dims[Dimension::Health.as_index()].description, "custom");
        // untouched dimension keeps demo data
        assert_eq!(dims[Dimension::Value.as_index()].score, 3);
    }

    #[test]
    fn test_empty_config_is_demo_data() {
        let dims = parse("").into_dimensions();
        let scores: Vec<u8> = dims.iter().map(|d| d.score).collect();
        assert_eq!(scores, vec![3, 7, 5, 7, 1]);
    }

    #[test]
    fn test_default_config_parses() {
        let cfg = parse(DEFAULT_CONFIG);
        assert_eq!(cfg.dimensions.len(), DIMENSION_COUNT);
    }

    #[test]
    fn test_explicit_checklist_overrides_derived() {
        let cfg = parse(
            r#"
            [[dimensions]]
            dimension = "value"
            score = 7
            checklist = [false, false, true]
            "#,
        );
        let dims = cfg.into_dimensions();
        let list = dims[Dimension::Value.as_index()].checklist;
        assert_eq!(list, [false, false, true, true, true, true]);
    }
}
