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
use crate::car::CarSpecs;
use crate::tune_type::{TuneType, Variant};

pub const AERO_UTILISATION_RANGE: (f64, f64) = (0.0, 1.0);

struct AeroProfile {
    front: (f64, f64),
    rear: (f64, f64)
}

/// Fraction of the available downforce to run, soft to stiff variant
fn aero_profile(tune_type: TuneType) -> AeroProfile {
    match tune_type {
        TuneType::Grip => AeroProfile { front: (0.6, 0.9), rear: (0.6, 0.9) },
        TuneType::Street => AeroProfile { front: (0.2, 0.5), rear: (0.3, 0.6) },
        TuneType::Race => AeroProfile { front: (0.8, 1.0), rear: (0.8, 1.0) },
        TuneType::Drift => AeroProfile { front: (0.2, 0.4), rear: (0.05, 0.2) },
        TuneType::Drag => AeroProfile { front: (0.0, 0.0), rear: (0.0, 0.1) },
        TuneType::Rally => AeroProfile { front: (0.4, 0.7), rear: (0.5, 0.8) },
        TuneType::Offroad => AeroProfile { front: (0.3, 0.6), rear: (0.4, 0.7) }
    }
}

pub fn aero_utilisation(tune_type: TuneType, variant: Variant) -> AxlePair {
    let profile = aero_profile(tune_type);
    AxlePair::new(lerp(profile.front, variant.position()), lerp(profile.rear, variant.position()))
        .map(|fraction| clamp(fraction, AERO_UTILISATION_RANGE))
}

/// Downforce (lb) to dial in. Zero front and rear when the car has no adjustable aero.
pub fn calculate_aero(specs: &CarSpecs, tune_type: TuneType, variant: Variant) -> AxlePair {
    match specs.aero() {
        None => AxlePair::new(0.0, 0.0),
        Some(capacity) => {
            let utilisation = aero_utilisation(tune_type, variant);
            AxlePair::new(round_float_to(capacity.front * utilisation.front, 0),
                          round_float_to(capacity.rear * utilisation.rear, 0))
        }
    }
}
