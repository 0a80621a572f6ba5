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
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utils::numeric::is_within;
use crate::error::{PropertyParseError, SpecError};
use crate::pi_class::PiClass;

pub const WEIGHT_RANGE: (f64, f64) = (1000.0, 10000.0);
pub const WEIGHT_DISTRIBUTION_RANGE: (f64, f64) = (35.0, 65.0);
pub const GEAR_COUNT_RANGE: (u8, u8) = (4, 10);
pub const DRIVING_STYLE_RANGE: (i8, i8) = (-2, 2);

pub const DEFAULT_HORSEPOWER: f64 = 400.0;
pub const DEFAULT_GEAR_COUNT: u8 = 6;
pub const DEFAULT_DRIVING_STYLE: i8 = 0;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum DriveType {
    RWD,
    FWD,
    AWD
}

impl DriveType {
    pub const RWD_VALUE: &'static str = "RWD";
    pub const FWD_VALUE: &'static str = "FWD";
    pub const AWD_VALUE: &'static str = "AWD";

    pub const ALL: [DriveType; 3] = [DriveType::RWD, DriveType::FWD, DriveType::AWD];

    pub fn as_str(&self) -> &'static str {
        match self {
            DriveType::RWD => { DriveType::RWD_VALUE }
            DriveType::FWD => { DriveType::FWD_VALUE }
            DriveType::AWD => { DriveType::AWD_VALUE }
        }
    }
}

impl FromStr for DriveType {
    type Err = PropertyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            DriveType::RWD_VALUE => Ok(DriveType::RWD),
            DriveType::FWD_VALUE => Ok(DriveType::FWD),
            DriveType::AWD_VALUE => Ok(DriveType::AWD),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

impl Display for DriveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TireCompound {
    Street,
    #[default]
    Sport,
    SemiSlick,
    Slick,
    Rally,
    Offroad,
    Drag
}

impl TireCompound {
    pub const STREET_VALUE: &'static str = "street";
    pub const SPORT_VALUE: &'static str = "sport";
    pub const SEMI_SLICK_VALUE: &'static str = "semi-slick";
    pub const SLICK_VALUE: &'static str = "slick";
    pub const RALLY_VALUE: &'static str = "rally";
    pub const OFFROAD_VALUE: &'static str = "offroad";
    pub const DRAG_VALUE: &'static str = "drag";

    pub const ALL: [TireCompound; 7] = [
        TireCompound::Street,
        TireCompound::Sport,
        TireCompound::SemiSlick,
        TireCompound::Slick,
        TireCompound::Rally,
        TireCompound::Offroad,
        TireCompound::Drag
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TireCompound::Street => TireCompound::STREET_VALUE,
            TireCompound::Sport => TireCompound::SPORT_VALUE,
            TireCompound::SemiSlick => TireCompound::SEMI_SLICK_VALUE,
            TireCompound::Slick => TireCompound::SLICK_VALUE,
            TireCompound::Rally => TireCompound::RALLY_VALUE,
            TireCompound::Offroad => TireCompound::OFFROAD_VALUE,
            TireCompound::Drag => TireCompound::DRAG_VALUE
        }
    }
}

impl FromStr for TireCompound {
    type Err = PropertyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            TireCompound::STREET_VALUE => Ok(TireCompound::Street),
            TireCompound::SPORT_VALUE => Ok(TireCompound::Sport),
            TireCompound::SEMI_SLICK_VALUE | "semislick" => Ok(TireCompound::SemiSlick),
            TireCompound::SLICK_VALUE => Ok(TireCompound::Slick),
            TireCompound::RALLY_VALUE => Ok(TireCompound::Rally),
            TireCompound::OFFROAD_VALUE | "off-road" => Ok(TireCompound::Offroad),
            TireCompound::DRAG_VALUE => Ok(TireCompound::Drag),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

impl Display for TireCompound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maximum downforce (lb) the car's aero parts can be set to, per axle
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AeroCapacity {
    pub front: f64,
    pub rear: f64
}

/// Validated, immutable description of the car being tuned.
///
/// Only obtainable through [`CarSpecs::try_from`] on a [`CarSpecsInput`], so every
/// instance respects the documented bounds and the calculators can rely on them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarSpecs {
    weight: f64,
    weight_distribution: f64,
    drive_type: DriveType,
    pi_class: PiClass,
    horsepower: f64,
    gear_count: u8,
    tire_compound: TireCompound,
    aero: Option<AeroCapacity>,
    driving_style: i8
}

impl CarSpecs {
    /// Total weight in lb
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Percentage of the total weight carried by the front axle
    pub fn weight_distribution(&self) -> f64 {
        self.weight_distribution
    }

    pub fn front_weight_fraction(&self) -> f64 {
        self.weight_distribution / 100.0
    }

    /// Sprung weight (lb) resting on one front corner
    pub fn front_corner_weight(&self) -> f64 {
        self.weight * self.front_weight_fraction() / 2.0
    }

    /// Sprung weight (lb) resting on one rear corner
    pub fn rear_corner_weight(&self) -> f64 {
        self.weight * (1.0 - self.front_weight_fraction()) / 2.0
    }

    pub fn drive_type(&self) -> DriveType {
        self.drive_type
    }

    pub fn pi_class(&self) -> PiClass {
        self.pi_class
    }

    pub fn horsepower(&self) -> f64 {
        self.horsepower
    }

    /// Horsepower per 1000 lb
    pub fn power_to_weight(&self) -> f64 {
        self.horsepower / (self.weight / 1000.0)
    }

    pub fn gear_count(&self) -> u8 {
        self.gear_count
    }

    pub fn tire_compound(&self) -> TireCompound {
        self.tire_compound
    }

    pub fn has_aero(&self) -> bool {
        self.aero.is_some()
    }

    pub fn aero(&self) -> Option<AeroCapacity> {
        self.aero
    }

    /// -2 (wants understeer) ..= 2 (wants oversteer)
    pub fn driving_style(&self) -> i8 {
        self.driving_style
    }
}

impl Display for CarSpecs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} class {} {:.0}lb {:.0}% front {:.0}hp {}-speed on {} tyres",
               self.pi_class, self.drive_type, self.weight, self.weight_distribution,
               self.horsepower, self.gear_count, self.tire_compound)
    }
}

/// Raw car description as a caller would supply it, e.g. from a toml file.
/// Missing optional values take the documented defaults during conversion.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CarSpecsInput {
    pub weight: f64,
    pub weight_distribution: f64,
    pub drive_type: String,
    pub pi_class: String,
    #[serde(default)]
    pub horsepower: Option<f64>,
    #[serde(default)]
    pub gear_count: Option<u8>,
    #[serde(default)]
    pub tire_compound: Option<String>,
    #[serde(default)]
    pub has_aero: bool,
    #[serde(default)]
    pub front_downforce: f64,
    #[serde(default)]
    pub rear_downforce: f64,
    #[serde(default)]
    pub driving_style: Option<i8>
}

fn parse_field<T: FromStr<Err = PropertyParseError>>(name: &str, value: &str) -> Result<T, SpecError> {
    T::from_str(value).map_err(|e| SpecError::InvalidField(name.to_string(), e))
}

impl TryFrom<CarSpecsInput> for CarSpecs {
    type Error = SpecError;

    fn try_from(input: CarSpecsInput) -> Result<Self, Self::Error> {
        if !is_within(input.weight, WEIGHT_RANGE) {
            return Err(SpecError::WeightOutOfRange(input.weight, WEIGHT_RANGE));
        }
        if !is_within(input.weight_distribution, WEIGHT_DISTRIBUTION_RANGE) {
            return Err(SpecError::WeightDistributionOutOfRange(input.weight_distribution,
                                                               WEIGHT_DISTRIBUTION_RANGE));
        }
        let horsepower = input.horsepower.unwrap_or(DEFAULT_HORSEPOWER);
        if !(horsepower > 0.0) || !horsepower.is_finite() {
            return Err(SpecError::InvalidHorsepower(horsepower));
        }
        let gear_count = input.gear_count.unwrap_or(DEFAULT_GEAR_COUNT);
        if gear_count < GEAR_COUNT_RANGE.0 || gear_count > GEAR_COUNT_RANGE.1 {
            return Err(SpecError::GearCountOutOfRange(gear_count, GEAR_COUNT_RANGE));
        }
        let driving_style = input.driving_style.unwrap_or(DEFAULT_DRIVING_STYLE);
        if driving_style < DRIVING_STYLE_RANGE.0 || driving_style > DRIVING_STYLE_RANGE.1 {
            return Err(SpecError::DrivingStyleOutOfRange(driving_style, DRIVING_STYLE_RANGE));
        }
        let aero = match input.has_aero {
            true => {
                if !(input.front_downforce >= 0.0) || !(input.rear_downforce >= 0.0) {
                    return Err(SpecError::NegativeDownforce(input.front_downforce, input.rear_downforce));
                }
                Some(AeroCapacity { front: input.front_downforce, rear: input.rear_downforce })
            }
            false => None
        };
        let tire_compound = match &input.tire_compound {
            None => TireCompound::default(),
            Some(compound) => parse_field("tire_compound", compound)?
        };

        Ok(CarSpecs {
            weight: input.weight,
            weight_distribution: input.weight_distribution,
            drive_type: parse_field("drive_type", &input.drive_type)?,
            pi_class: parse_field("pi_class", &input.pi_class)?,
            horsepower,
            gear_count,
            tire_compound,
            aero,
            driving_style
        })
    }
}
