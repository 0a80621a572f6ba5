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

use std::f64::consts::PI;
use utils::numeric::{clamp, lerp, round_float_to};
use crate::calculators::AxlePair;
use crate::car::CarSpecs;
use crate::pi_class::PiScale;
use crate::tune_type::{TuneType, Variant};

/// lb/in
pub const SPRING_RATE_RANGE: (f64, f64) = (40.0, 3000.0);
/// Standard gravity in in/s^2; turns a corner weight in lb into a mass for a rate in lb/in
const GRAVITY_IN_PER_S2: f64 = 386.088;

struct SpringProfile {
    /// Front ride frequency (Hz) for the softest and stiffest variant
    front_frequency: (f64, f64),
    /// Rear frequency as a multiple of the front
    rear_ratio: f64
}

fn spring_profile(tune_type: TuneType) -> SpringProfile {
    match tune_type {
        TuneType::Grip => SpringProfile { front_frequency: (2.0, 2.6), rear_ratio: 1.08 },
        TuneType::Street => SpringProfile { front_frequency: (1.5, 2.0), rear_ratio: 1.05 },
        TuneType::Race => SpringProfile { front_frequency: (2.4, 3.0), rear_ratio: 1.10 },
        TuneType::Drift => SpringProfile { front_frequency: (1.8, 2.4), rear_ratio: 0.95 },
        TuneType::Drag => SpringProfile { front_frequency: (1.2, 1.6), rear_ratio: 0.85 },
        TuneType::Rally => SpringProfile { front_frequency: (1.3, 1.8), rear_ratio: 1.03 },
        TuneType::Offroad => SpringProfile { front_frequency: (1.0, 1.4), rear_ratio: 1.0 }
    }
}

/// Target ride frequency (Hz) front and rear for the discipline and variant
pub fn ride_frequency(tune_type: TuneType, variant: Variant) -> AxlePair {
    let profile = spring_profile(tune_type);
    let front = lerp(profile.front_frequency, variant.position());
    AxlePair::new(front, front * profile.rear_ratio)
}

/// Spring rate (lb/in) giving `frequency_hz` for a corner carrying `corner_weight` lb
pub fn frequency_to_spring_rate(frequency_hz: f64, corner_weight: f64) -> f64 {
    let angular = 2.0 * PI * frequency_hz;
    angular * angular * corner_weight / GRAVITY_IN_PER_S2
}

pub fn calculate_springs(specs: &CarSpecs, tune_type: TuneType, variant: Variant, scale: &PiScale) -> AxlePair {
    let frequency = ride_frequency(tune_type, variant);
    let front = frequency_to_spring_rate(frequency.front, specs.front_corner_weight());
    let rear = frequency_to_spring_rate(frequency.rear, specs.rear_corner_weight());
    AxlePair::new(front, rear).map(|rate| {
        round_float_to(clamp(rate * scale.spring_scale, SPRING_RATE_RANGE), 1)
    })
}

#[cfg(test)]
mod tests {
    use crate::calculators::springs::*;
    use crate::car::CarSpecsInput;
    use crate::pi_class::PiClass;

    fn specs(weight: f64, distribution: f64) -> CarSpecs {
        CarSpecs::try_from(CarSpecsInput {
            weight,
            weight_distribution: distribution,
            drive_type: "RWD".to_string(),
            pi_class: "A".to_string(),
            ..Default::default()
        }).unwrap()
    }

    #[test]
    fn rate_from_frequency() {
        // 2Hz on a 780lb corner
        let rate = frequency_to_spring_rate(2.0, 780.0);
        assert!((rate - 319.03).abs() < 0.05, "{}", rate);
        assert!(frequency_to_spring_rate(2.2, 780.0) > rate);
        assert!(frequency_to_spring_rate(2.0, 800.0) > rate);
    }

    #[test]
    fn variants_move_through_the_range() {
        for tune_type in TuneType::ALL {
            let soft = ride_frequency(tune_type, Variant::Soft);
            let standard = ride_frequency(tune_type, Variant::Standard);
            let stiff = ride_frequency(tune_type, Variant::Stiff);
            assert!(soft.front < standard.front && standard.front < stiff.front, "{}", tune_type);
        }
    }

    #[test]
    fn heavier_axle_gets_stiffer_spring() {
        let car = specs(3000.0, 58.0);
        let springs = calculate_springs(&car, TuneType::Grip, Variant::Standard, PiClass::A.scale());
        let nose_light = calculate_springs(&specs(3000.0, 45.0), TuneType::Grip, Variant::Standard,
                                           PiClass::A.scale());
        assert!(springs.front > nose_light.front);
        assert!(springs.rear < nose_light.rear);
    }

    #[test]
    fn pi_class_scales_springs() {
        let car = specs(3000.0, 52.0);
        let d = calculate_springs(&car, TuneType::Race, Variant::Standard, PiClass::D.scale());
        let x = calculate_springs(&car, TuneType::Race, Variant::Standard, PiClass::X.scale());
        assert!(d.front < x.front);
        assert!(d.rear < x.rear);
    }

    #[test]
    fn springs_are_clamped() {
        let car = specs(10000.0, 65.0);
        let springs = calculate_springs(&car, TuneType::Race, Variant::Stiff, PiClass::X.scale());
        assert_eq!(springs.front, SPRING_RATE_RANGE.1);

        let car = specs(1000.0, 35.0);
        let springs = calculate_springs(&car, TuneType::Offroad, Variant::Soft, PiClass::D.scale());
        assert_eq!(springs.front, SPRING_RATE_RANGE.0);
    }
}
