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
use crate::car::{CarSpecs, DriveType, TireCompound};
use crate::pi_class::PiScale;
use crate::tune_type::TuneType;

/// PSI. Holds whatever the compound or discipline.
pub const TIRE_PRESSURE_RANGE: (f64, f64) = (14.0, 55.0);

/// Cold front pressure (psi) for a compound before any trims
fn compound_base_pressure(compound: TireCompound) -> f64 {
    match compound {
        TireCompound::Street => 28.0,
        TireCompound::Sport => 29.0,
        TireCompound::SemiSlick => 30.0,
        TireCompound::Slick => 31.0,
        TireCompound::Rally => 26.0,
        TireCompound::Offroad => 22.0,
        TireCompound::Drag => 15.0
    }
}

/// Front and rear psi added for the discipline
fn discipline_trim(tune_type: TuneType) -> AxlePair {
    match tune_type {
        TuneType::Grip => AxlePair::new(0.0, 0.0),
        TuneType::Street => AxlePair::new(0.5, 0.5),
        TuneType::Race => AxlePair::new(0.5, 0.5),
        TuneType::Drift => AxlePair::new(1.0, 3.0),
        TuneType::Drag => AxlePair::new(0.0, -1.5),
        TuneType::Rally => AxlePair::new(-1.5, -1.5),
        TuneType::Offroad => AxlePair::new(-3.0, -3.0)
    }
}

/// Rear pressure relative to the front. Driven tyres run slightly softer for traction.
fn drive_type_rear_offset(drive_type: DriveType) -> f64 {
    match drive_type {
        DriveType::RWD => -0.5,
        DriveType::FWD => 0.5,
        DriveType::AWD => 0.0
    }
}

pub fn calculate_tire_pressure(specs: &CarSpecs, tune_type: TuneType, scale: &PiScale) -> AxlePair {
    let base = compound_base_pressure(specs.tire_compound()) + scale.pressure_trim;
    let trim = discipline_trim(tune_type);
    let front = base + trim.front;
    let rear = base + trim.rear + drive_type_rear_offset(specs.drive_type());
    AxlePair::new(front, rear).map(|psi| round_float_to(clamp(psi, TIRE_PRESSURE_RANGE), 1))
}

#[cfg(test)]
mod tests {
    use crate::calculators::tyres::*;
    use crate::car::CarSpecsInput;
    use crate::pi_class::PiClass;

    fn specs(drive_type: &str, compound: &str) -> CarSpecs {
        CarSpecs::try_from(CarSpecsInput {
            weight: 3000.0,
            weight_distribution: 52.0,
            drive_type: drive_type.to_string(),
            pi_class: "A".to_string(),
            tire_compound: Some(compound.to_string()),
            ..Default::default()
        }).unwrap()
    }

    #[test]
    fn sport_grip_rwd() {
        let pressure = calculate_tire_pressure(&specs("RWD", "sport"), TuneType::Grip, PiClass::A.scale());
        assert_eq!(pressure.front, 29.0);
        assert_eq!(pressure.rear, 28.5);
    }

    #[test]
    fn fwd_rear_runs_higher() {
        let pressure = calculate_tire_pressure(&specs("FWD", "sport"), TuneType::Grip, PiClass::A.scale());
        assert_eq!(pressure.rear, 29.5);
        let pressure = calculate_tire_pressure(&specs("AWD", "sport"), TuneType::Grip, PiClass::A.scale());
        assert_eq!(pressure.front, pressure.rear);
    }

    #[test]
    fn compound_ordering() {
        let pressure_for = |compound| {
            calculate_tire_pressure(&specs("AWD", compound), TuneType::Grip, PiClass::A.scale()).front
        };
        assert!(pressure_for("street") < pressure_for("slick"));
        assert!(pressure_for("drag") < pressure_for("street"));
        assert!(pressure_for("drag") < pressure_for("offroad"));
    }

    #[test]
    fn drag_pressure_is_clamped() {
        let pressure = calculate_tire_pressure(&specs("RWD", "drag"), TuneType::Drag, PiClass::D.scale());
        assert_eq!(pressure.front, 14.0);
        assert_eq!(pressure.rear, TIRE_PRESSURE_RANGE.0);
    }

    #[test]
    fn pi_class_trims_pressure() {
        let car = specs("RWD", "slick");
        let d = calculate_tire_pressure(&car, TuneType::Race, PiClass::D.scale());
        let x = calculate_tire_pressure(&car, TuneType::Race, PiClass::X.scale());
        assert_eq!(x.front - d.front, 2.5);
    }
}
