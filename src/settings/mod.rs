/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of drone-calc.
 *
 * drone-calc is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * drone-calc is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with drone-calc. If not, see <https://www.gnu.org/licenses/>.
 */

use std::{fs, io};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use config::{Config, ConfigError};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use crate::data::get_local_app_data_path;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    colour: bool,
    catalog_path: String,
    battery_verbosity: u8,
    tether_verbosity: u8,
    log_level: String
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            colour: true,
            catalog_path: String::new(),
            battery_verbosity: 1,
            tether_verbosity: 4,
            log_level: Level::INFO.to_string()
        }
    }
}

impl GlobalSettings {
    const COLOUR: &'static str = "colour";
    const CATALOG_PATH: &'static str = "catalog_path";
    const BATTERY_VERBOSITY: &'static str = "battery_verbosity";
    const TETHER_VERBOSITY: &'static str = "tether_verbosity";
    const LOG_LEVEL: &'static str = "log_level";
    const CONFIG_FILENAME: &'static str = "drone-calc-conf";
    const ENV_PREFIX: &'static str = "DRONE_CALC";

    pub fn config_file_path() -> PathBuf {
        get_local_app_data_path().join(format!("{}.toml", GlobalSettings::CONFIG_FILENAME))
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = GlobalSettings::default();
        Config::builder()
            .set_default(GlobalSettings::COLOUR, defaults.colour)?
            .set_default(GlobalSettings::CATALOG_PATH, defaults.catalog_path)?
            .set_default(GlobalSettings::BATTERY_VERBOSITY, defaults.battery_verbosity as i64)?
            .set_default(GlobalSettings::TETHER_VERBOSITY, defaults.tether_verbosity as i64)?
            .set_default(GlobalSettings::LOG_LEVEL, defaults.log_level)
    }

    /// Load settings from the settings file in the app data dir, with `DRONE_CALC_*`
    /// environment variables taking precedence. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        GlobalSettings::builder_with_defaults()?
            .add_source(config::File::from(GlobalSettings::config_file_path()).required(false))
            .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        GlobalSettings::builder_with_defaults()?
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }

    pub fn colour(&self) -> bool {
        self.colour
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        let trimmed = self.catalog_path.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(PathBuf::from(trimmed))
    }

    pub fn battery_verbosity(&self) -> u8 {
        self.battery_verbosity
    }

    pub fn tether_verbosity(&self) -> u8 {
        self.tether_verbosity
    }

    pub fn log_level(&self) -> Level {
        Level::from_str(self.log_level.trim()).unwrap_or_else(|_| {
            warn!("Unknown log level '{}'. Using {}", self.log_level, Level::INFO);
            Level::INFO
        })
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&self)
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string().map_err(|_e|{
            io::Error::new(io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)?;
        info!("Settings written to {}", path.display());
        Ok(())
    }
}
