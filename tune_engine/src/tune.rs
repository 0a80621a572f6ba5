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
use tracing::{debug, warn};
use crate::balance::apply_balance_stiffness;
use crate::calculators::AxlePair;
use crate::calculators::aero::calculate_aero;
use crate::calculators::alignment::{calculate_alignment, Alignment};
use crate::calculators::anti_roll::calculate_anti_roll_bars;
use crate::calculators::brakes::{calculate_brakes, BrakeSettings};
use crate::calculators::damping::{calculate_damping, Damping};
use crate::calculators::gearing::{calculate_gearing, Gearing};
use crate::calculators::ride_height::calculate_ride_height;
use crate::calculators::springs::calculate_springs;
use crate::calculators::tyres::calculate_tire_pressure;
use crate::car::CarSpecs;
use crate::differential::{fallback_baseline, get_baseline_differential, scale_differential_for_driving_style, DiffStyle, DifferentialSettings};
use crate::tune_type::{TuneType, Variant};

/// A complete setup. Pressures are psi, springs lb/in, ride height inches, aero lb,
/// angles degrees and everything else the raw slider value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TuneSettings {
    pub tune_type: TuneType,
    pub variant: Variant,
    pub tire_pressure: AxlePair,
    pub alignment: Alignment,
    pub anti_roll_bars: AxlePair,
    pub springs: AxlePair,
    pub ride_height: AxlePair,
    pub damping: Damping,
    pub aero: AxlePair,
    pub differential: DifferentialSettings,
    pub brakes: BrakeSettings,
    pub gearing: Gearing
}

impl TuneSettings {
    /// Layer a balance (-100..=100) and stiffness (0..=100) override over the bars and
    /// springs. See [`crate::balance`] for the sign convention.
    pub fn with_balance_stiffness(mut self, balance: f64, stiffness: f64) -> TuneSettings {
        let (arb_front, arb_rear, springs_front, springs_rear) = apply_balance_stiffness(
            self.anti_roll_bars.front,
            self.anti_roll_bars.rear,
            self.springs.front,
            self.springs.rear,
            balance,
            stiffness
        );
        self.anti_roll_bars = AxlePair::new(arb_front, arb_rear);
        self.springs = AxlePair::new(springs_front, springs_rear);
        self
    }

    /// Physical front brake bias in percent. The `balance` slider is inverted.
    pub fn brake_front_bias(&self) -> f64 {
        self.brakes.front_bias()
    }
}

fn calculate_differential(specs: &CarSpecs, tune_type: TuneType) -> DifferentialSettings {
    let baseline = match get_baseline_differential(specs.drive_type(), tune_type) {
        Some(baseline) => baseline,
        None => {
            warn!("No {} differential baseline for {}; using the grip baseline", tune_type, specs.drive_type());
            fallback_baseline(specs.drive_type())
        }
    };
    scale_differential_for_driving_style(baseline, DiffStyle::from_driving_style(specs.driving_style()))
}

/// Build a complete tune for the car. Pure and deterministic: the same inputs always
/// produce the same settings.
pub fn calculate_tune(specs: &CarSpecs, tune_type: TuneType, variant: Variant) -> TuneSettings {
    debug!("Calculating {} ({}) tune for {}", tune_type, variant, specs);
    let scale = specs.pi_class().scale();

    let springs = calculate_springs(specs, tune_type, variant, scale);
    let damping = calculate_damping(&springs, tune_type, scale);

    let tune = TuneSettings {
        tune_type,
        variant,
        tire_pressure: calculate_tire_pressure(specs, tune_type, scale),
        alignment: calculate_alignment(specs, tune_type, variant),
        anti_roll_bars: calculate_anti_roll_bars(specs, tune_type, variant, scale),
        springs,
        ride_height: calculate_ride_height(specs, tune_type, variant),
        damping,
        aero: calculate_aero(specs, tune_type, variant),
        differential: calculate_differential(specs, tune_type),
        brakes: calculate_brakes(specs, tune_type),
        gearing: calculate_gearing(specs, tune_type, scale)
    };
    debug!("Calculated tune {:?}", tune);
    tune
}
