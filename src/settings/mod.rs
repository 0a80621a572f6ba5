/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of tune-crane.
 *
 * tune-crane is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * tune-crane is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with tune-crane. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;
use clap::ValueEnum;
use config::{Config, ConfigError};
use config::builder::{ConfigBuilder, DefaultState};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use tune_engine::balance::BALANCE_RANGE;
use tune_engine::{TuneType, Variant};
use utils::numeric::{is_valid_percentage, is_within};
use utils::units::UnitSystem;
use crate::error::AppError;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml"
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    unit_system: UnitSystem,
    tune_type: TuneType,
    variant: Variant,
    balance: f64,
    stiffness: f64,
    output: OutputFormat
}

impl GlobalSettings {
    const UNIT_SYSTEM: &'static str = "unit_system";
    const TUNE_TYPE: &'static str = "tune_type";
    const VARIANT: &'static str = "variant";
    const BALANCE: &'static str = "balance";
    const STIFFNESS: &'static str = "stiffness";
    const OUTPUT: &'static str = "output";
    const CONFIG_FILENAME: &'static str = "tune-crane-conf";
    const ENV_PREFIX: &'static str = "TUNE_CRANE";

    pub fn default() -> Self {
        GlobalSettings {
            unit_system: UnitSystem::default(),
            tune_type: TuneType::Grip,
            variant: Variant::default(),
            balance: 0.0,
            stiffness: 50.0,
            output: OutputFormat::default()
        }
    }

    fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = GlobalSettings::default();
        builder
            .set_default(GlobalSettings::UNIT_SYSTEM, defaults.unit_system.as_str())?
            .set_default(GlobalSettings::TUNE_TYPE, defaults.tune_type.as_str())?
            .set_default(GlobalSettings::VARIANT, defaults.variant.as_str())?
            .set_default(GlobalSettings::BALANCE, defaults.balance)?
            .set_default(GlobalSettings::STIFFNESS, defaults.stiffness)?
            .set_default(GlobalSettings::OUTPUT, defaults.output.as_str())
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: GlobalSettings = builder.build()?.try_deserialize()?;
        settings.validate().map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(settings)
    }

    /// Directory holding the per-user settings file, if the platform has one
    pub fn user_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "zephyrj", "tune-crane").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load settings from the built-in defaults, then `tune-crane-conf.toml` in the user
    /// config dir, then the same file in the current dir, then `TUNE_CRANE_*` env vars.
    /// Settings that can't be loaded are replaced by the defaults, which are written
    /// back to the current dir.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = GlobalSettings::with_defaults(Config::builder())?;
        if let Some(config_dir) = GlobalSettings::user_config_dir() {
            builder = builder.add_source(config::File::from(config_dir.join(GlobalSettings::CONFIG_FILENAME)).required(false));
        }
        builder = builder
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME).required(false))
            .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX));

        return match GlobalSettings::build(builder) {
            Ok(settings) => {
                info!("Loaded settings {:?}", settings);
                Ok(settings)
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let ret = GlobalSettings::build(GlobalSettings::with_defaults(Config::builder())?)?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !is_within(self.balance, BALANCE_RANGE) {
            return Err(AppError::InvalidSetting(
                GlobalSettings::BALANCE.to_string(),
                format!("{} is outside {} to {}", self.balance, BALANCE_RANGE.0, BALANCE_RANGE.1)
            ));
        }
        if !is_valid_percentage(self.stiffness) {
            return Err(AppError::InvalidSetting(
                GlobalSettings::STIFFNESS.to_string(),
                format!("{} is not a percentage", self.stiffness)
            ));
        }
        Ok(())
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
    }

    pub fn tune_type(&self) -> TuneType {
        self.tune_type
    }

    pub fn set_tune_type(&mut self, tune_type: TuneType) {
        self.tune_type = tune_type;
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn set_stiffness(&mut self, stiffness: f64) {
        self.stiffness = stiffness;
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn set_output(&mut self, output: OutputFormat) {
        self.output = output;
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, FileFormat};
    use crate::settings::*;

    fn from_toml(data: &str) -> Result<GlobalSettings, ConfigError> {
        let builder = GlobalSettings::with_defaults(Config::builder())?
            .add_source(config::File::from_str(data, FileFormat::Toml));
        GlobalSettings::build(builder)
    }

    #[test]
    fn empty_file_gives_defaults() -> Result<(), String> {
        let settings = from_toml("").map_err(|e| e.to_string())?;
        assert_eq!(settings, GlobalSettings::default());
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<(), String> {
        let settings = from_toml(r#"
            unit_system = "metric"
            tune_type = "rally"
            variant = "stiff"
            balance = -30
            output = "json"
        "#).map_err(|e| e.to_string())?;
        assert_eq!(settings.unit_system(), UnitSystem::Metric);
        assert_eq!(settings.tune_type(), TuneType::Rally);
        assert_eq!(settings.variant(), Variant::Stiff);
        assert_eq!(settings.balance(), -30.0);
        assert_eq!(settings.stiffness(), 50.0);
        assert_eq!(settings.output(), OutputFormat::Json);
        Ok(())
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(from_toml("balance = 150").is_err());
        assert!(from_toml("stiffness = -5").is_err());
        assert!(from_toml("tune_type = \"hillclimb\"").is_err());
    }

    #[test]
    fn settings_encode_to_toml() -> Result<(), String> {
        let encoded = toml::to_string(&GlobalSettings::default()).map_err(|e| e.to_string())?;
        assert_eq!(from_toml(&encoded).map_err(|e| e.to_string())?, GlobalSettings::default());
        Ok(())
    }
}
