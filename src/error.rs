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

use std::io;
use thiserror::Error;
use tune_engine::SpecError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("io error. `{0}`")]
    IoError(#[from] io::Error),
    #[error("failed to read car file `{0}`. `{1}`")]
    CarFileError(String, String),
    #[error("invalid car specification. `{0}`")]
    InvalidSpec(#[from] SpecError),
    #[error("settings error. `{0}`")]
    SettingsError(#[from] config::ConfigError),
    #[error("invalid setting `{0}`. `{1}`")]
    InvalidSetting(String, String),
    #[error("toml decoding error. `{0}`")]
    TomlDecodeError(#[from] toml::de::Error),
    #[error("toml encoding error. `{0}`")]
    TomlEncodeError(#[from] toml::ser::Error),
    #[error("json encoding error. `{0}`")]
    JsonError(#[from] serde_json::Error)
}
