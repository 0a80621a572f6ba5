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
use crate::car::{CarSpecs, DriveType};
use crate::tune_type::{TuneType, Variant};

/// Degrees
pub const CAMBER_RANGE: (f64, f64) = (-5.0, 5.0);
/// Degrees, positive values toe the wheels out
pub const TOE_RANGE: (f64, f64) = (-5.0, 5.0);
pub const CASTER_RANGE: (f64, f64) = (1.0, 7.0);

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Alignment {
    pub camber: AxlePair,
    pub toe: AxlePair,
    pub caster: f64
}

struct AlignmentProfile {
    camber: AxlePair,
    toe: AxlePair,
    caster: f64,
    /// Camber change per variant step; stiffer variants run more negative camber
    variant_camber_step: f64
}

fn alignment_profile(tune_type: TuneType) -> AlignmentProfile {
    match tune_type {
        TuneType::Grip => AlignmentProfile {
            camber: AxlePair::new(-1.5, -1.0), toe: AxlePair::new(0.0, -0.1), caster: 5.5, variant_camber_step: 0.2
        },
        TuneType::Street => AlignmentProfile {
            camber: AxlePair::new(-1.0, -0.6), toe: AxlePair::new(0.0, -0.1), caster: 5.0, variant_camber_step: 0.2
        },
        TuneType::Race => AlignmentProfile {
            camber: AxlePair::new(-2.0, -1.4), toe: AxlePair::new(0.1, -0.2), caster: 6.0, variant_camber_step: 0.2
        },
        TuneType::Drift => AlignmentProfile {
            camber: AxlePair::new(-5.0, -0.5), toe: AxlePair::new(1.0, 0.0), caster: 7.0, variant_camber_step: 0.3
        },
        TuneType::Drag => AlignmentProfile {
            camber: AxlePair::new(0.0, 0.0), toe: AxlePair::new(0.0, 0.0), caster: 5.0, variant_camber_step: 0.0
        },
        TuneType::Rally => AlignmentProfile {
            camber: AxlePair::new(-0.8, -0.4), toe: AxlePair::new(0.0, -0.1), caster: 5.5, variant_camber_step: 0.2
        },
        TuneType::Offroad => AlignmentProfile {
            camber: AxlePair::new(-0.4, -0.2), toe: AxlePair::new(0.0, 0.0), caster: 4.5, variant_camber_step: 0.1
        }
    }
}

/// Extra camber for the driven and steered axle
fn drive_type_camber(drive_type: DriveType) -> AxlePair {
    match drive_type {
        DriveType::RWD => AxlePair::new(0.0, 0.0),
        DriveType::FWD => AxlePair::new(-0.2, 0.1),
        DriveType::AWD => AxlePair::new(-0.1, 0.0)
    }
}

pub fn calculate_alignment(specs: &CarSpecs, tune_type: TuneType, variant: Variant) -> Alignment {
    let profile = alignment_profile(tune_type);
    let drive_trim = drive_type_camber(specs.drive_type());
    let variant_shift = -profile.variant_camber_step * variant.offset();
    let camber = AxlePair::new(profile.camber.front + drive_trim.front + variant_shift,
                               profile.camber.rear + drive_trim.rear + variant_shift);

    Alignment {
        camber: camber.map(|degrees| round_float_to(clamp(degrees, CAMBER_RANGE), 1)),
        toe: profile.toe.map(|degrees| round_float_to(clamp(degrees, TOE_RANGE), 1)),
        caster: round_float_to(clamp(profile.caster, CASTER_RANGE), 1)
    }
}
