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

use serde::Serialize;
use utils::numeric::{clamp, round_float_to};
use crate::car::CarSpecs;
use crate::tune_type::TuneType;

/// Percent
pub const BRAKE_PRESSURE_RANGE: (f64, f64) = (50.0, 200.0);
/// Slider position, see [`BrakeSettings::balance`]
pub const BRAKE_BALANCE_RANGE: (f64, f64) = (0.0, 100.0);
/// How much of the static weight bias carries over into brake bias
const WEIGHT_BIAS_CARRY: f64 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct BrakeSettings {
    pub pressure: f64,
    /// Brake balance as the game's slider shows it. The slider is inverted: lower
    /// numbers move the bias towards the front. Consumers expect this exact value so
    /// it is kept inverted rather than reported as a front percentage.
    pub balance: f64
}

impl BrakeSettings {
    /// Physical percentage of braking force sent to the front axle
    pub fn front_bias(&self) -> f64 {
        BRAKE_BALANCE_RANGE.1 - self.balance
    }
}

/// Brake pressure and the front bias offset (percentage points) for a discipline
fn brake_profile(tune_type: TuneType) -> (f64, f64) {
    match tune_type {
        TuneType::Grip => (100.0, 0.0),
        TuneType::Street => (100.0, 0.0),
        TuneType::Race => (100.0, 2.0),
        TuneType::Drift => (100.0, -6.0),
        TuneType::Drag => (100.0, 4.0),
        TuneType::Rally => (90.0, -2.0),
        TuneType::Offroad => (85.0, 0.0)
    }
}

pub fn calculate_brakes(specs: &CarSpecs, tune_type: TuneType) -> BrakeSettings {
    let (pressure, bias_offset) = brake_profile(tune_type);
    let front_bias = 50.0 + (specs.weight_distribution() - 50.0) * WEIGHT_BIAS_CARRY + bias_offset;
    BrakeSettings {
        pressure: clamp(pressure, BRAKE_PRESSURE_RANGE),
        balance: round_float_to(clamp(BRAKE_BALANCE_RANGE.1 - front_bias, BRAKE_BALANCE_RANGE), 0)
    }
}
