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

//! User override applied on top of a calculated tune.
//!
//! Sign convention: a positive balance multiplies the front anti-roll bar and front
//! springs up and the rear ones down. Stiffening the front relative to the rear is
//! treated here as moving the car towards oversteer, so positive balance means "more
//! oversteer" and negative means "more understeer". This is the convention the rest of
//! the tooling uses; don't flip it.

use utils::numeric::{clamp, round_float_to};
use crate::calculators::anti_roll::ARB_RANGE;

pub const BALANCE_RANGE: (f64, f64) = (-100.0, 100.0);
pub const STIFFNESS_RANGE: (f64, f64) = (0.0, 100.0);
/// Largest fractional change a full balance input makes to either axle
const BALANCE_AUTHORITY: f64 = 0.25;
const STIFFNESS_FLOOR: f64 = 0.7;
const STIFFNESS_SPAN: f64 = 0.6;

/// Front and rear multipliers for a balance in [`BALANCE_RANGE`]
pub fn balance_multipliers(balance: f64) -> (f64, f64) {
    let balance_factor = clamp(balance, BALANCE_RANGE) / 100.0;
    (1.0 + BALANCE_AUTHORITY * balance_factor, 1.0 - BALANCE_AUTHORITY * balance_factor)
}

/// Overall multiplier for a stiffness in [`STIFFNESS_RANGE`]; 50 leaves things alone
pub fn stiffness_scale(stiffness: f64) -> f64 {
    STIFFNESS_FLOOR + STIFFNESS_SPAN * (clamp(stiffness, STIFFNESS_RANGE) / 100.0)
}

/// Scale anti-roll bars and springs by a balance (-100..=100) and stiffness (0..=100).
/// Returns `(arb_front, arb_rear, springs_front, springs_rear)`.
///
/// Bars are clamped back into [`ARB_RANGE`]. Springs are left unbounded since spring
/// rates vary too much between classes for a single bound to mean anything.
pub fn apply_balance_stiffness(arb_front: f64,
                               arb_rear: f64,
                               springs_front: f64,
                               springs_rear: f64,
                               balance: f64,
                               stiffness: f64) -> (f64, f64, f64, f64) {
    let (front_multiplier, rear_multiplier) = balance_multipliers(balance);
    let scale = stiffness_scale(stiffness);
    (
        round_float_to(clamp(arb_front * front_multiplier * scale, ARB_RANGE), 1),
        round_float_to(clamp(arb_rear * rear_multiplier * scale, ARB_RANGE), 1),
        round_float_to(springs_front * front_multiplier * scale, 1),
        round_float_to(springs_rear * rear_multiplier * scale, 1)
    )
}

#[cfg(test)]
mod tests {
    use crate::balance::*;

    #[test]
    fn neutral_input_is_identity() {
        let (arb_front, arb_rear, springs_front, springs_rear) =
            apply_balance_stiffness(34.3, 31.7, 412.5, 388.2, 0.0, 50.0);
        assert_eq!(arb_front, 34.3);
        assert_eq!(arb_rear, 31.7);
        assert_eq!(springs_front, 412.5);
        assert_eq!(springs_rear, 388.2);
    }

    #[test]
    fn multipliers() {
        assert_eq!(balance_multipliers(0.0), (1.0, 1.0));
        assert_eq!(balance_multipliers(100.0), (1.25, 0.75));
        assert_eq!(balance_multipliers(-100.0), (0.75, 1.25));
        assert_eq!(balance_multipliers(400.0), (1.25, 0.75), "balance is clamped");
        assert_eq!(stiffness_scale(0.0), 0.7);
        assert!((stiffness_scale(50.0) - 1.0).abs() < 1e-12);
        assert!((stiffness_scale(100.0) - 1.3).abs() < 1e-12);
        assert_eq!(stiffness_scale(-20.0), 0.7, "stiffness is clamped");
    }

    #[test]
    fn positive_balance_stiffens_front() {
        let (arb_front, arb_rear, springs_front, springs_rear) =
            apply_balance_stiffness(30.0, 30.0, 400.0, 400.0, 40.0, 50.0);
        assert_eq!(arb_front, 33.0);
        assert_eq!(arb_rear, 27.0);
        assert_eq!(springs_front, 440.0);
        assert_eq!(springs_rear, 360.0);
    }

    #[test]
    fn bars_are_clamped_springs_are_not() {
        let (arb_front, arb_rear, springs_front, springs_rear) =
            apply_balance_stiffness(60.0, 4.0, 2900.0, 100.0, 100.0, 100.0);
        assert_eq!(arb_front, ARB_RANGE.1);
        assert_eq!(arb_rear, 3.9);
        assert_eq!(springs_front, 4712.5);
        assert_eq!(springs_rear, 97.5);

        let (_, arb_rear, _, _) = apply_balance_stiffness(30.0, 1.0, 400.0, 400.0, 100.0, 0.0);
        assert_eq!(arb_rear, ARB_RANGE.0);
    }
}
