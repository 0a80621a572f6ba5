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

use std::{error, fmt};
use std::fmt::{Display, Formatter};

/// Raised at the caller boundary when raw car input can't be turned into [`crate::CarSpecs`].
/// The calculators themselves never fail; they clamp.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("weight `{0}` lb is outside {1:?}")]
    WeightOutOfRange(f64, (f64, f64)),
    #[error("front weight distribution `{0}`% is outside {1:?}")]
    WeightDistributionOutOfRange(f64, (f64, f64)),
    #[error("horsepower must be positive, got `{0}`")]
    InvalidHorsepower(f64),
    #[error("gear count `{0}` is outside {1:?}")]
    GearCountOutOfRange(u8, (u8, u8)),
    #[error("driving style `{0}` is outside {1:?}")]
    DrivingStyleOutOfRange(i8, (i8, i8)),
    #[error("downforce must be non-negative, got front `{0}` rear `{1}`")]
    NegativeDownforce(f64, f64),
    #[error("invalid car data `{0}`. `{1}`")]
    InvalidField(String, PropertyParseError)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyParseError {
    invalid_value: String
}

impl PropertyParseError {
    pub fn new(invalid_value: &str) -> PropertyParseError {
        PropertyParseError {
            invalid_value: String::from(invalid_value)
        }
    }
}

impl Display for PropertyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown value '{}'", &self.invalid_value)
    }
}

impl error::Error for PropertyParseError {}
