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

use utils::numeric::{clamp, round_float_to};
use crate::calculators::AxlePair;
use crate::car::CarSpecs;
use crate::tune_type::{TuneType, Variant};

/// Inches
pub const RIDE_HEIGHT_RANGE: (f64, f64) = (2.5, 12.0);
/// Cars making real downforce can run lower without bottoming at speed
const AERO_HEIGHT_DROP: f64 = 0.3;
const VARIANT_HEIGHT_STEP: f64 = 0.3;

fn base_ride_height(tune_type: TuneType) -> AxlePair {
    match tune_type {
        TuneType::Grip => AxlePair::new(4.4, 4.6),
        TuneType::Street => AxlePair::new(5.2, 5.4),
        TuneType::Race => AxlePair::new(3.8, 4.0),
        TuneType::Drift => AxlePair::new(4.6, 4.6),
        TuneType::Drag => AxlePair::new(5.0, 4.6),
        TuneType::Rally => AxlePair::new(6.6, 6.8),
        TuneType::Offroad => AxlePair::new(8.2, 8.4)
    }
}

pub fn calculate_ride_height(specs: &CarSpecs, tune_type: TuneType, variant: Variant) -> AxlePair {
    let aero_drop = match specs.has_aero() {
        true => AERO_HEIGHT_DROP,
        false => 0.0
    };
    let shift = -VARIANT_HEIGHT_STEP * variant.offset() - aero_drop;
    base_ride_height(tune_type).map(|height| round_float_to(clamp(height + shift, RIDE_HEIGHT_RANGE), 1))
}

#[cfg(test)]
mod tests {
    use crate::calculators::ride_height::*;
    use crate::car::CarSpecsInput;

    fn specs(has_aero: bool) -> CarSpecs {
        CarSpecs::try_from(CarSpecsInput {
            weight: 3000.0,
            weight_distribution: 52.0,
            drive_type: "RWD".to_string(),
            pi_class: "A".to_string(),
            has_aero,
            front_downforce: 200.0,
            rear_downforce: 300.0,
            ..Default::default()
        }).unwrap()
    }

    #[test]
    fn ride_height_by_discipline() {
        let race = calculate_ride_height(&specs(false), TuneType::Race, Variant::Standard);
        let offroad = calculate_ride_height(&specs(false), TuneType::Offroad, Variant::Standard);
        assert_eq!(race, AxlePair::new(3.8, 4.0));
        assert!(offroad.front > race.front);
    }

    #[test]
    fn aero_and_stiff_variant_lower_the_car() {
        let standard = calculate_ride_height(&specs(false), TuneType::Grip, Variant::Standard);
        let aero = calculate_ride_height(&specs(true), TuneType::Grip, Variant::Standard);
        let stiff = calculate_ride_height(&specs(false), TuneType::Grip, Variant::Stiff);
        assert_eq!(aero.front, 4.1);
        assert_eq!(stiff.front, 4.1);
        assert!(standard.front > aero.front);
    }
}
