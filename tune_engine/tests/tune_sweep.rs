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

use itertools::iproduct;
use tune_engine::calculators::anti_roll::ARB_RANGE;
use tune_engine::calculators::brakes::{BRAKE_BALANCE_RANGE, BRAKE_PRESSURE_RANGE};
use tune_engine::calculators::damping::DAMPING_RANGE;
use tune_engine::calculators::gearing::{FINAL_DRIVE_RANGE, GEAR_RATIO_RANGE};
use tune_engine::calculators::ride_height::RIDE_HEIGHT_RANGE;
use tune_engine::calculators::tyres::TIRE_PRESSURE_RANGE;
use tune_engine::calculators::AxlePair;
use tune_engine::differential::{CENTER_BALANCE_RANGE, DIFF_LOCK_RANGE, DiffLock};
use tune_engine::{calculate_tune, validate_differential_settings, CarSpecs, CarSpecsInput,
                  DifferentialSettings, DriveType, PiClass, TireCompound, TuneSettings,
                  TuneType, Variant};

fn within(value: f64, range: (f64, f64)) -> bool {
    value >= range.0 && value <= range.1
}

fn pair_within(pair: &AxlePair, range: (f64, f64)) -> bool {
    within(pair.front, range) && within(pair.rear, range)
}

fn lock_within(lock: &DiffLock) -> bool {
    within(lock.accel, DIFF_LOCK_RANGE) && within(lock.decel, DIFF_LOCK_RANGE)
}

fn car(weight: f64,
       distribution: f64,
       drive_type: DriveType,
       pi_class: PiClass,
       compound: TireCompound,
       has_aero: bool,
       driving_style: i8) -> CarSpecs {
    CarSpecs::try_from(CarSpecsInput {
        weight,
        weight_distribution: distribution,
        drive_type: drive_type.to_string(),
        pi_class: pi_class.to_string(),
        horsepower: Some(weight / 6.0),
        gear_count: Some(6),
        tire_compound: Some(compound.to_string()),
        has_aero,
        front_downforce: if has_aero { 250.0 } else { 0.0 },
        rear_downforce: if has_aero { 400.0 } else { 0.0 },
        driving_style: Some(driving_style)
    }).unwrap()
}

/// Every drivetrain, class, tyre compound, discipline and variant over a spread of
/// light, heavy, nose-heavy and tail-heavy cars.
fn sweep() -> Vec<(CarSpecs, TuneSettings)> {
    let shapes = [(1000.0, 35.0), (2800.0, 50.0), (3500.0, 58.0), (10000.0, 65.0)];
    iproduct!(shapes, DriveType::ALL, PiClass::ALL, TireCompound::ALL, TuneType::ALL, Variant::ALL, [-2, 0, 2])
        .map(|((weight, distribution), drive_type, pi_class, compound, tune_type, variant, style)| {
            let specs = car(weight, distribution, drive_type, pi_class, compound, weight > 3000.0, style);
            let tune = calculate_tune(&specs, tune_type, variant);
            (specs, tune)
        })
        .collect()
}

#[test]
fn every_tune_respects_hard_bounds() {
    for (specs, tune) in sweep() {
        assert!(pair_within(&tune.tire_pressure, TIRE_PRESSURE_RANGE), "{} {:?}", specs, tune.tire_pressure);
        assert!(pair_within(&tune.anti_roll_bars, ARB_RANGE), "{} {:?}", specs, tune.anti_roll_bars);
        assert!(pair_within(&tune.ride_height, RIDE_HEIGHT_RANGE), "{} {:?}", specs, tune.ride_height);
        assert!(pair_within(&tune.damping.rebound, DAMPING_RANGE), "{} {:?}", specs, tune.damping);
        assert!(pair_within(&tune.damping.bump, DAMPING_RANGE), "{} {:?}", specs, tune.damping);
        assert!(within(tune.gearing.final_drive, FINAL_DRIVE_RANGE), "{} {}", specs, tune.gearing.final_drive);
        assert!(tune.gearing.ratios.iter().all(|ratio| within(*ratio, GEAR_RATIO_RANGE)), "{} {:?}", specs, tune.gearing.ratios);
        assert!(within(tune.brakes.pressure, BRAKE_PRESSURE_RANGE), "{} {:?}", specs, tune.brakes);
        assert!(within(tune.brakes.balance, BRAKE_BALANCE_RANGE), "{} {:?}", specs, tune.brakes);
    }
}

#[test]
fn every_compound_keeps_pressure_in_range() {
    let tunes = sweep();
    for compound in TireCompound::ALL {
        let pressures = tunes.iter()
            .filter(|(specs, _)| specs.tire_compound() == compound)
            .map(|(_, tune)| tune.tire_pressure)
            .collect::<Vec<_>>();
        assert!(!pressures.is_empty(), "{} not swept", compound);
        assert!(pressures.iter().all(|pair| pair_within(pair, TIRE_PRESSURE_RANGE)), "{}", compound);
    }
}

#[test]
fn bump_never_exceeds_rebound() {
    for (specs, tune) in sweep() {
        assert!(tune.damping.bump.front <= tune.damping.rebound.front, "{} {:?}", specs, tune.damping);
        assert!(tune.damping.bump.rear <= tune.damping.rebound.rear, "{} {:?}", specs, tune.damping);
    }
}

#[test]
fn differential_shape_and_bounds() {
    for (specs, tune) in sweep() {
        assert_eq!(tune.differential.drive_type(), specs.drive_type());
        match &tune.differential {
            DifferentialSettings::Awd { front, rear, center_balance } => {
                assert!(lock_within(front) && lock_within(rear), "{} {}", specs, tune.differential);
                assert!(within(*center_balance, CENTER_BALANCE_RANGE), "{} {}", specs, tune.differential);
            }
            DifferentialSettings::Rwd(lock) | DifferentialSettings::Fwd(lock) => {
                assert!(lock_within(lock), "{} {}", specs, tune.differential);
            }
        }
        let validation = validate_differential_settings(&tune.differential, specs.drive_type());
        assert!(validation.valid, "{} {:?}", specs, validation.errors);
    }
}

#[test]
fn gears_are_strictly_decreasing() {
    for gear_count in 4..=10 {
        for tune_type in TuneType::ALL {
            let specs = CarSpecs::try_from(CarSpecsInput {
                weight: 3200.0,
                weight_distribution: 50.0,
                drive_type: "RWD".to_string(),
                pi_class: "S1".to_string(),
                gear_count: Some(gear_count),
                ..Default::default()
            }).unwrap();
            let tune = calculate_tune(&specs, tune_type, Variant::Standard);
            assert_eq!(tune.gearing.ratios.len(), gear_count as usize);
            assert!(tune.gearing.ratios.windows(2).all(|pair| pair[0] > pair[1]),
                    "{} {}: {:?}", tune_type, gear_count, tune.gearing.ratios);
        }
    }
}

#[test]
fn identical_inputs_give_identical_tunes() {
    let specs = car(3100.0, 54.0, DriveType::AWD, PiClass::S2, TireCompound::Slick, true, 1);
    let first = calculate_tune(&specs, TuneType::Race, Variant::Stiff);
    let second = calculate_tune(&specs, TuneType::Race, Variant::Stiff);
    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}

#[test]
fn no_aero_means_no_downforce() {
    let specs = car(2800.0, 50.0, DriveType::RWD, PiClass::A, TireCompound::Sport, false, 0);
    for tune_type in TuneType::ALL {
        let tune = calculate_tune(&specs, tune_type, Variant::Standard);
        assert_eq!(tune.aero, AxlePair::new(0.0, 0.0));
    }
}

#[test]
fn soft_to_stiff_orders_springs() {
    let specs = car(3000.0, 52.0, DriveType::RWD, PiClass::A, TireCompound::Sport, false, 0);
    for tune_type in TuneType::ALL {
        let springs: Vec<f64> = Variant::ALL.iter()
            .map(|variant| calculate_tune(&specs, tune_type, *variant).springs.front)
            .collect();
        assert!(springs[0] <= springs[1] && springs[1] <= springs[2], "{}: {:?}", tune_type, springs);
    }
}

#[test]
fn serialises_differential_by_drive_type() {
    let specs = car(3000.0, 50.0, DriveType::AWD, PiClass::A, TireCompound::Sport, false, 0);
    let tune = calculate_tune(&specs, TuneType::Grip, Variant::Standard);
    let json = serde_json::to_value(&tune).unwrap();
    assert_eq!(json["differential"]["drive_type"], "AWD");
    assert!(json["differential"]["center_balance"].is_number());
    assert!(json["differential"].get("accel").is_none());

    let specs = car(3000.0, 50.0, DriveType::FWD, PiClass::A, TireCompound::Sport, false, 0);
    let tune = calculate_tune(&specs, TuneType::Grip, Variant::Standard);
    let json = serde_json::to_value(&tune).unwrap();
    assert_eq!(json["differential"]["drive_type"], "FWD");
    assert!(json["differential"].get("center_balance").is_none());
}
