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
use tune_engine::calculators::AxlePair;
use tune_engine::{CarSpecs, DifferentialRecommendation, DifferentialValidation, TuneSettings};
use utils::numeric::round_float_to;
use utils::units::UnitSystem;

/// What gets written for the json and toml output formats. Values stay in the
/// engine's imperial units whatever the configured unit system.
#[derive(Debug, Serialize)]
pub struct TuneReport<'a> {
    pub car: &'a CarSpecs,
    pub tune: &'a TuneSettings
}

fn gear_name(gear_index: usize) -> String {
    match gear_index {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{}th", gear_index)
    }
}

fn pair_line(label: &str, pair: &AxlePair, unit: &str, decimal_places: u32) -> String {
    format!("{:<14}F {} {}  R {} {}",
            label,
            round_float_to(pair.front, decimal_places), unit,
            round_float_to(pair.rear, decimal_places), unit)
}

/// Render a tune as a plain text sheet. The engine works in imperial units so values
/// are converted here for metric output.
pub fn render_tune(specs: &CarSpecs, tune: &TuneSettings, units: UnitSystem) -> String {
    let pressure = tune.tire_pressure.map(|psi| units.pressure_from_psi(psi));
    let springs = tune.springs.map(|rate| units.spring_rate_from_lb_in(rate));
    let ride_height = tune.ride_height.map(|height| units.length_from_inches(height));
    let aero = tune.aero.map(|downforce| units.mass_from_lb(downforce));
    let (pressure_places, spring_places) = match units {
        UnitSystem::Imperial => (1, 1),
        UnitSystem::Metric => (2, 2)
    };

    let mut lines = vec![
        format!("{} tune ({}) for {}", tune.tune_type, tune.variant, specs),
        pair_line("Tyres", &pressure, units.pressure_unit(), pressure_places),
        pair_line("Camber", &tune.alignment.camber, "deg", 1),
        pair_line("Toe", &tune.alignment.toe, "deg", 1),
        format!("{:<14}{} deg", "Caster", tune.alignment.caster),
        pair_line("Anti-roll", &tune.anti_roll_bars, "", 1),
        pair_line("Springs", &springs, units.spring_rate_unit(), spring_places),
        pair_line("Ride height", &ride_height, units.length_unit(), 1),
        pair_line("Rebound", &tune.damping.rebound, "", 1),
        pair_line("Bump", &tune.damping.bump, "", 1),
    ];
    if specs.has_aero() {
        lines.push(pair_line("Aero", &aero, units.mass_unit(), 0));
    }
    lines.push(format!("{:<14}{}", "Differential", tune.differential));
    lines.push(format!("{:<14}pressure {}%, balance {}% ({}% front)",
                       "Brakes", tune.brakes.pressure, tune.brakes.balance, tune.brake_front_bias()));
    lines.push(format!("{:<14}final drive {:.2}", "Gearing", tune.gearing.final_drive));
    lines.push(format!("{:<14}{}", "", tune.gearing.ratios.iter()
        .enumerate()
        .map(|(idx, ratio)| format!("{} {:.2}", gear_name(idx + 1), ratio))
        .join("  ")));
    lines.push(format!("{:<14}{}", "", tune.gearing.note));
    lines.join("\n")
}

/// Render a differential recommendation along with its validation result
pub fn render_differential(recommendation: &DifferentialRecommendation,
                           validation: &DifferentialValidation) -> String {
    let mut lines = vec![
        recommendation.explanation.clone(),
        format!("Settings: {}", recommendation.settings),
    ];
    lines.extend(recommendation.baseline.pros.iter().map(|pro| format!("  + {}", pro)));
    lines.extend(recommendation.baseline.cons.iter().map(|con| format!("  - {}", con)));
    if !recommendation.tips.is_empty() {
        lines.push("Tips:".to_string());
        lines.extend(recommendation.tips.iter().map(|tip| format!("  * {}", tip)));
    }
    lines.extend(validation.errors.iter().map(|e| format!("Error: {}", e)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use tune_engine::{calculate_tune, get_differential_recommendation, validate_differential_settings,
                      CarSpecsInput, DiffStyle, DriveType, TuneType, Variant};
    use crate::report::*;

    fn specs(has_aero: bool) -> CarSpecs {
        CarSpecs::try_from(CarSpecsInput {
            weight: 2900.0,
            weight_distribution: 48.0,
            drive_type: "RWD".to_string(),
            pi_class: "A".to_string(),
            has_aero,
            front_downforce: 200.0,
            rear_downforce: 300.0,
            ..Default::default()
        }).unwrap()
    }

    #[test]
    fn gear_names() {
        assert_eq!(gear_name(1), "1st");
        assert_eq!(gear_name(3), "3rd");
        assert_eq!(gear_name(7), "7th");
    }

    #[test]
    fn imperial_sheet() {
        let specs = specs(false);
        let tune = calculate_tune(&specs, TuneType::Grip, Variant::Standard);
        let sheet = render_tune(&specs, &tune, UnitSystem::Imperial);
        assert!(sheet.starts_with("grip tune (standard) for A class RWD"), "{}", sheet);
        assert!(sheet.contains("psi"));
        assert!(sheet.contains("lb/in"));
        assert!(!sheet.contains("Aero"), "no aero line for cars without aero");
        assert_eq!(sheet.lines().filter(|line| line.contains("1st")).count(), 1);
    }

    #[test]
    fn metric_sheet() {
        let specs = specs(true);
        let tune = calculate_tune(&specs, TuneType::Race, Variant::Stiff);
        let sheet = render_tune(&specs, &tune, UnitSystem::Metric);
        assert!(sheet.contains("bar"));
        assert!(sheet.contains("kgf/mm"));
        assert!(sheet.contains("Aero"));
        assert!(!sheet.contains("psi"));
    }

    #[test]
    fn differential_sheet() {
        let recommendation = get_differential_recommendation(DriveType::AWD, TuneType::Rally, DiffStyle::Stable).unwrap();
        let validation = validate_differential_settings(&recommendation.settings, DriveType::AWD);
        let sheet = render_differential(&recommendation, &validation);
        assert!(sheet.contains("Tips:"));
        assert!(!sheet.contains("Error:"));
    }
}
