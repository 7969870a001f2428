//! Client configuration.
//!
//! Layered load: an optional TOML file (explicit path or
//! `<config dir>/keyward/keyward.toml`) with `KEYWARD_*` environment
//! overrides on top.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Directory holding the account profile. Defaults to the platform
    /// data dir.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                if let Some(dir) = dirs::config_dir() {
                    let default_path = dir.join("keyward").join("keyward.toml");
                    builder =
                        builder.add_source(config::File::from(default_path).required(false));
                }
            }
        }
        let loaded = builder
            .add_source(config::Environment::with_prefix("KEYWARD"))
            .build()?;
        let config: Config = loaded.try_deserialize()?;
        Ok(config)
    }

    /// Directory the account profile lives in.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("keyward")
        })
    }
}
