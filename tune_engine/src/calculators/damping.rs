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
use crate::calculators::AxlePair;
use crate::pi_class::PiScale;
use crate::tune_type::TuneType;

pub const DAMPING_RANGE: (f64, f64) = (1.0, 20.0);
/// Maps `ratio * sqrt(lb/in)` onto the damping slider
const DAMPING_GAIN: f64 = 0.6;

struct DampingProfile {
    /// Fraction of critical damping used for rebound
    ratio: f64,
    /// Bump as a fraction of rebound
    bump_fraction: f64
}

fn damping_profile(tune_type: TuneType) -> DampingProfile {
    match tune_type {
        TuneType::Grip => DampingProfile { ratio: 0.9, bump_fraction: 0.65 },
        TuneType::Street => DampingProfile { ratio: 0.7, bump_fraction: 0.6 },
        TuneType::Race => DampingProfile { ratio: 1.0, bump_fraction: 0.65 },
        TuneType::Drift => DampingProfile { ratio: 0.8, bump_fraction: 0.5 },
        TuneType::Drag => DampingProfile { ratio: 0.6, bump_fraction: 0.55 },
        TuneType::Rally => DampingProfile { ratio: 0.55, bump_fraction: 0.55 },
        TuneType::Offroad => DampingProfile { ratio: 0.5, bump_fraction: 0.5 }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Damping {
    pub rebound: AxlePair,
    pub bump: AxlePair
}

pub fn rebound_for_spring_rate(spring_rate: f64, damping_ratio: f64, scale: &PiScale) -> f64 {
    let rebound = damping_ratio * spring_rate.sqrt() * DAMPING_GAIN * scale.damping_scale;
    round_float_to(clamp(rebound, DAMPING_RANGE), 1)
}

/// Bump is derived from rebound and can never exceed it
fn bump_for_rebound(rebound: f64, bump_fraction: f64) -> f64 {
    clamp(round_float_to(rebound * bump_fraction, 1), (DAMPING_RANGE.0, rebound))
}

pub fn calculate_damping(springs: &AxlePair, tune_type: TuneType, scale: &PiScale) -> Damping {
    let profile = damping_profile(tune_type);
    let rebound = springs.map(|rate| rebound_for_spring_rate(rate, profile.ratio, scale));
    let bump = rebound.map(|value| bump_for_rebound(value, profile.bump_fraction));
    Damping { rebound, bump }
}
