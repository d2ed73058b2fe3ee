pub mod parser;

use serde::Deserialize;
use std::{env, path::Path};

use crate::{errors::Error, types};

use self::parser::Parser;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub parser: Parser,
}

impl Config {
    pub fn get_config_dir() -> types::Result<String> {
        if let Ok(dir) = env::var("SHIRUSHI_CONFIG_DIR") {
            return Ok(dir);
        }

        let mut path = env::current_exe().map_err(|e| Error::ConfigDirNotFound {
            message: e.to_string(),
        })?;
        path.pop();
        path.push("config");

        if path.is_dir() {
            return match path.to_str() {
                Some(v) => Ok(v.into()),
                _ => Err(Error::ConfigDirNotFound {
                    message: "config dir path is not valid unicode".to_string(),
                }),
            };
        }

        if Path::new("config").is_dir() {
            return Ok("config".into());
        }

        Err(Error::ConfigDirNotFound {
            message: "default config dir was not found".to_string(),
        })
    }

    pub fn custom(run_mode: &str, config_dir: &str) -> types::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", config_dir)))
            // run mode and local overrides are optional
            .add_source(
                config::File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false),
            )
            .add_source(config::File::with_name(&format!("{}/local", config_dir)).required(false))
            // Eg.. `SHIRUSHI_PARSER__DEFAULT_SOURCE=k8s` sets `parser.default_source`
            .add_source(
                config::Environment::with_prefix("shirushi")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| Error::ConfigLoadFailed {
                message: format!("config dir: '{}', run mode: '{}'", config_dir, run_mode),
                source: e.into(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| Error::ConfigLoadFailed {
                message: "failed to deserialize config".to_string(),
                source: e.into(),
            })
    }

    pub fn custom_run_mode(run_mode: &str) -> types::Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Self::custom(run_mode, &config_dir)
    }

    pub fn new() -> types::Result<Self> {
        let run_mode = env::var("SHIRUSHI_RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::custom_run_mode(&run_mode)
    }
}
