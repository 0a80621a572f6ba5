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

//! Rule based estimator that turns a car's physical specification and a tuning
//! discipline into a complete suspension, drivetrain, brake and gearing setup.
//!
//! Every public function is pure and only reads immutable tables, so calls can be
//! made from any number of threads at once.

pub mod error;
pub mod car;
pub mod pi_class;
pub mod tune_type;
pub mod differential;
pub mod calculators;
pub mod tune;
pub mod balance;

pub use balance::apply_balance_stiffness;
pub use car::{CarSpecs, CarSpecsInput, DriveType, TireCompound};
pub use differential::{get_baseline_differential, get_differential_recommendation,
                       scale_differential_for_driving_style, validate_differential_settings,
                       DiffStyle, DifferentialRecommendation, DifferentialSettings,
                       DifferentialValidation};
pub use error::{PropertyParseError, SpecError};
pub use pi_class::PiClass;
pub use tune::{calculate_tune, TuneSettings};
pub use tune_type::{TuneType, Variant};
