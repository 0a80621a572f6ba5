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

use itertools::Itertools;
use serde::Serialize;
use utils::numeric::{clamp, round_float_to};
use crate::car::CarSpecs;
use crate::pi_class::PiScale;
use crate::tune_type::TuneType;

pub const FINAL_DRIVE_RANGE: (f64, f64) = (2.5, 5.5);
pub const GEAR_RATIO_RANGE: (f64, f64) = (0.48, 6.0);
/// hp per 1000lb that the base final drives are chosen for
const REFERENCE_POWER_TO_WEIGHT: f64 = 130.0;
const POWER_TO_WEIGHT_EXPONENT: f64 = 0.3;
/// Faster classes see higher top speeds and want taller gearing
const CLASS_TOP_SPEED_EXPONENT: f64 = 0.15;
/// How much wider the lowest gear step is than the top one, per gear
const GEAR_STEP_PROGRESSION: f64 = 0.15;
/// Share of a final drive change the gearbox takes back. 0.5 splits it evenly between
/// the final drive and the box.
const GEARBOX_FINAL_DRIVE_SHARE: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Gearing {
    pub final_drive: f64,
    pub ratios: Vec<f64>,
    pub note: String
}

struct GearingProfile {
    final_drive: f64,
    first_gear: f64,
    top_gear: f64,
    focus: &'static str
}

fn gearing_profile(tune_type: TuneType) -> GearingProfile {
    match tune_type {
        TuneType::Grip => GearingProfile {
            final_drive: 3.7, first_gear: 3.4, top_gear: 0.78,
            focus: "balanced between corner exit drive and straight line speed"
        },
        TuneType::Street => GearingProfile {
            final_drive: 3.4, first_gear: 3.3, top_gear: 0.72,
            focus: "relaxed spacing with a tall cruising top gear"
        },
        TuneType::Race => GearingProfile {
            final_drive: 3.6, first_gear: 3.2, top_gear: 0.82,
            focus: "close ratios to keep the engine in its power band"
        },
        TuneType::Drift => GearingProfile {
            final_drive: 3.9, first_gear: 3.1, top_gear: 0.9,
            focus: "short ratios so second and third cover most corners"
        },
        TuneType::Drag => GearingProfile {
            final_drive: 3.2, first_gear: 3.0, top_gear: 0.7,
            focus: "tall spacing to keep shifts to a minimum down the strip"
        },
        TuneType::Rally => GearingProfile {
            final_drive: 4.2, first_gear: 3.6, top_gear: 0.85,
            focus: "short gearing for acceleration out of loose corners"
        },
        TuneType::Offroad => GearingProfile {
            final_drive: 4.4, first_gear: 3.9, top_gear: 0.85,
            focus: "short gearing to climb and pull through soft ground"
        }
    }
}

/// Final drive from the car's power to weight. Cars with more power per pound get
/// taller (numerically lower) gearing.
pub fn calculate_final_drive(specs: &CarSpecs, tune_type: TuneType, scale: &PiScale) -> f64 {
    let profile = gearing_profile(tune_type);
    let power_factor = (REFERENCE_POWER_TO_WEIGHT / specs.power_to_weight()).powf(POWER_TO_WEIGHT_EXPONENT);
    let class_factor = (1.0 / scale.power_multiplier).powf(CLASS_TOP_SPEED_EXPONENT);
    round_float_to(clamp(profile.final_drive * power_factor * class_factor, FINAL_DRIVE_RANGE), 2)
}

/// Unrounded ratios from `first` to `top` spread so each step is smaller than the one
/// before it. Works in log space: step `k` of `n - 1` gets a weight that shrinks
/// linearly with `k`.
fn progressive_ratios(gear_count: u8, first: f64, top: f64) -> Vec<f64> {
    if gear_count < 2 {
        return vec![first];
    }
    let steps = (gear_count - 1) as usize;
    let weights = (0..steps)
        .map(|k| 1.0 + GEAR_STEP_PROGRESSION * (steps - 1 - k) as f64)
        .collect_vec();
    let total: f64 = weights.iter().sum();
    let log_span = (first / top).ln();

    let mut ratios = Vec::with_capacity(gear_count as usize);
    let mut log_ratio = first.ln();
    ratios.push(first);
    for weight in weights {
        log_ratio -= log_span * weight / total;
        ratios.push(log_ratio.exp());
    }
    ratios
}

/// Gear ratios for a box running on `final_drive`. The discipline's first and top
/// gears are set for its reference final drive; a shorter final drive gets a taller
/// box and a taller one a shorter box.
pub fn calculate_gear_ratios(gear_count: u8, tune_type: TuneType, final_drive: f64) -> Vec<f64> {
    let profile = gearing_profile(tune_type);
    let box_scale = (profile.final_drive / final_drive).powf(GEARBOX_FINAL_DRIVE_SHARE);
    progressive_ratios(gear_count, profile.first_gear * box_scale, profile.top_gear * box_scale)
        .into_iter()
        .map(|ratio| round_float_to(clamp(ratio, GEAR_RATIO_RANGE), 2))
        .collect()
}

pub fn calculate_gearing(specs: &CarSpecs, tune_type: TuneType, scale: &PiScale) -> Gearing {
    let final_drive = calculate_final_drive(specs, tune_type, scale);
    let ratios = calculate_gear_ratios(specs.gear_count(), tune_type, final_drive);
    let note = format!("{}-speed progressive gearbox from {:.2} to {:.2} on a {:.2} final drive; {}",
                       ratios.len(),
                       ratios.first().copied().unwrap_or_default(),
                       ratios.last().copied().unwrap_or_default(),
                       final_drive,
                       gearing_profile(tune_type).focus);
    Gearing { final_drive, ratios, note }
}
