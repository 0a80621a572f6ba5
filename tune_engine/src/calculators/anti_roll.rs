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

use utils::numeric::{clamp, lerp, round_float_to};
use crate::calculators::AxlePair;
use crate::car::{CarSpecs, DriveType};
use crate::pi_class::PiScale;
use crate::tune_type::{TuneType, Variant};

pub const ARB_RANGE: (f64, f64) = (1.0, 65.0);
/// Width of the in-game slider; the base bar is spread across it by axle weight
const ARB_SPAN: f64 = 64.0;
const ARB_OFFSET: f64 = 1.0;
/// Fractional change in front and rear bar per step of driving style
const DRIVING_STYLE_ARB_STEP: f64 = 0.04;

struct ArbProfile {
    /// Overall multiplier for the softest and stiffest variant
    factor: (f64, f64),
    /// Extra multiplier for the rear bar only
    rear_bias: f64
}

fn arb_profile(tune_type: TuneType) -> ArbProfile {
    match tune_type {
        TuneType::Grip => ArbProfile { factor: (0.85, 1.15), rear_bias: 1.0 },
        TuneType::Street => ArbProfile { factor: (0.6, 0.85), rear_bias: 0.95 },
        TuneType::Race => ArbProfile { factor: (0.95, 1.25), rear_bias: 1.05 },
        TuneType::Drift => ArbProfile { factor: (0.9, 1.2), rear_bias: 0.6 },
        TuneType::Drag => ArbProfile { factor: (0.15, 0.35), rear_bias: 0.8 },
        TuneType::Rally => ArbProfile { factor: (0.45, 0.7), rear_bias: 0.9 },
        TuneType::Offroad => ArbProfile { factor: (0.3, 0.5), rear_bias: 0.9 }
    }
}

/// Front wheel drive cars get a stiffer rear bar to help them rotate
fn drive_type_trim(drive_type: DriveType) -> AxlePair {
    match drive_type {
        DriveType::RWD => AxlePair::new(1.0, 1.0),
        DriveType::FWD => AxlePair::new(0.9, 1.15),
        DriveType::AWD => AxlePair::new(1.0, 1.05)
    }
}

/// Bar stiffness before any discipline or class scaling. The front bar follows the
/// front weight fraction and the rear bar follows its complement.
pub fn arb_base(front_weight_fraction: f64) -> AxlePair {
    AxlePair::new(ARB_SPAN * front_weight_fraction + ARB_OFFSET,
                  ARB_SPAN * (1.0 - front_weight_fraction) + ARB_OFFSET)
}

/// Anti-roll bars. A positive driving style (oversteer bias) stiffens the front and
/// softens the rear, following the same sign convention as
/// [`crate::balance::apply_balance_stiffness`].
pub fn calculate_anti_roll_bars(specs: &CarSpecs, tune_type: TuneType, variant: Variant, scale: &PiScale) -> AxlePair {
    let base = arb_base(specs.front_weight_fraction());
    let profile = arb_profile(tune_type);
    let factor = lerp(profile.factor, variant.position()) * scale.arb_scale;
    let trim = drive_type_trim(specs.drive_type());
    let style = specs.driving_style() as f64 * DRIVING_STYLE_ARB_STEP;

    let front = base.front * factor * trim.front * (1.0 + style);
    let rear = base.rear * factor * profile.rear_bias * trim.rear * (1.0 - style);
    AxlePair::new(front, rear).map(|bar| round_float_to(clamp(bar, ARB_RANGE), 1))
}
