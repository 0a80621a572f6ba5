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
use crate::error::PropertyParseError;

/// The discipline a tune is being built for
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TuneType {
    Grip,
    Street,
    Race,
    Drift,
    Drag,
    Rally,
    Offroad
}

impl TuneType {
    pub const GRIP_VALUE: &'static str = "grip";
    pub const STREET_VALUE: &'static str = "street";
    pub const RACE_VALUE: &'static str = "race";
    pub const DRIFT_VALUE: &'static str = "drift";
    pub const DRAG_VALUE: &'static str = "drag";
    pub const RALLY_VALUE: &'static str = "rally";
    pub const OFFROAD_VALUE: &'static str = "offroad";

    pub const ALL: [TuneType; 7] = [
        TuneType::Grip,
        TuneType::Street,
        TuneType::Race,
        TuneType::Drift,
        TuneType::Drag,
        TuneType::Rally,
        TuneType::Offroad
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TuneType::Grip => TuneType::GRIP_VALUE,
            TuneType::Street => TuneType::STREET_VALUE,
            TuneType::Race => TuneType::RACE_VALUE,
            TuneType::Drift => TuneType::DRIFT_VALUE,
            TuneType::Drag => TuneType::DRAG_VALUE,
            TuneType::Rally => TuneType::RALLY_VALUE,
            TuneType::Offroad => TuneType::OFFROAD_VALUE
        }
    }

    /// Loose surface disciplines get softer suspension and less braking force
    pub fn is_loose_surface(&self) -> bool {
        matches!(self, TuneType::Rally | TuneType::Offroad)
    }
}

impl FromStr for TuneType {
    type Err = PropertyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            TuneType::GRIP_VALUE => Ok(TuneType::Grip),
            TuneType::STREET_VALUE => Ok(TuneType::Street),
            TuneType::RACE_VALUE => Ok(TuneType::Race),
            TuneType::DRIFT_VALUE => Ok(TuneType::Drift),
            TuneType::DRAG_VALUE => Ok(TuneType::Drag),
            TuneType::RALLY_VALUE => Ok(TuneType::Rally),
            TuneType::OFFROAD_VALUE | "off-road" => Ok(TuneType::Offroad),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

impl Display for TuneType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sub-preset within a tune type. Every tune type defines its spring, anti-roll bar
/// and aero baselines as a `(soft, stiff)` range and the variant picks the point in
/// that range.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Soft,
    #[default]
    Standard,
    Stiff
}

impl Variant {
    pub const SOFT_VALUE: &'static str = "soft";
    pub const STANDARD_VALUE: &'static str = "standard";
    pub const STIFF_VALUE: &'static str = "stiff";

    pub const ALL: [Variant; 3] = [Variant::Soft, Variant::Standard, Variant::Stiff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Soft => Variant::SOFT_VALUE,
            Variant::Standard => Variant::STANDARD_VALUE,
            Variant::Stiff => Variant::STIFF_VALUE
        }
    }

    /// Where in a `(soft, stiff)` baseline range this variant sits
    pub fn position(&self) -> f64 {
        match self {
            Variant::Soft => 0.0,
            Variant::Standard => 0.5,
            Variant::Stiff => 1.0
        }
    }

    /// -1 for soft, 0 for standard and 1 for stiff. Used for small additive shifts.
    pub fn offset(&self) -> f64 {
        self.position() * 2.0 - 1.0
    }
}

impl FromStr for Variant {
    type Err = PropertyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            Variant::SOFT_VALUE => Ok(Variant::Soft),
            Variant::STANDARD_VALUE | "default" => Ok(Variant::Standard),
            Variant::STIFF_VALUE => Ok(Variant::Stiff),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
