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

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::PropertyParseError;

/// Performance Index class, ordered from slowest to fastest.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum PiClass {
    D,
    C,
    B,
    A,
    S1,
    S2,
    X
}

impl PiClass {
    pub const D_VALUE: &'static str = "D";
    pub const C_VALUE: &'static str = "C";
    pub const B_VALUE: &'static str = "B";
    pub const A_VALUE: &'static str = "A";
    pub const S1_VALUE: &'static str = "S1";
    pub const S2_VALUE: &'static str = "S2";
    pub const X_VALUE: &'static str = "X";

    pub const ALL: [PiClass; 7] = [
        PiClass::D, PiClass::C, PiClass::B, PiClass::A, PiClass::S1, PiClass::S2, PiClass::X
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PiClass::D => PiClass::D_VALUE,
            PiClass::C => PiClass::C_VALUE,
            PiClass::B => PiClass::B_VALUE,
            PiClass::A => PiClass::A_VALUE,
            PiClass::S1 => PiClass::S1_VALUE,
            PiClass::S2 => PiClass::S2_VALUE,
            PiClass::X => PiClass::X_VALUE
        }
    }

    pub fn scale(&self) -> &'static PiScale {
        match self {
            PiClass::D => &D_SCALE,
            PiClass::C => &C_SCALE,
            PiClass::B => &B_SCALE,
            PiClass::A => &A_SCALE,
            PiClass::S1 => &S1_SCALE,
            PiClass::S2 => &S2_SCALE,
            PiClass::X => &X_SCALE
        }
    }
}

impl FromStr for PiClass {
    type Err = PropertyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            PiClass::D_VALUE => Ok(PiClass::D),
            PiClass::C_VALUE => Ok(PiClass::C),
            PiClass::B_VALUE => Ok(PiClass::B),
            PiClass::A_VALUE => Ok(PiClass::A),
            PiClass::S1_VALUE => Ok(PiClass::S1),
            PiClass::S2_VALUE => Ok(PiClass::S2),
            PiClass::X_VALUE => Ok(PiClass::X),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

impl Display for PiClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Multipliers applied inside the stiffness related calculators for a given class.
/// Faster classes run stiffer cars and see more power, so every field grows with the class.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PiScale {
    pub spring_scale: f64,
    pub arb_scale: f64,
    pub damping_scale: f64,
    pub power_multiplier: f64,
    /// PSI added to the compound base pressure
    pub pressure_trim: f64
}

const D_SCALE: PiScale = PiScale { spring_scale: 0.80, arb_scale: 0.82, damping_scale: 0.85, power_multiplier: 0.60, pressure_trim: -1.0 };
const C_SCALE: PiScale = PiScale { spring_scale: 0.88, arb_scale: 0.88, damping_scale: 0.90, power_multiplier: 0.75, pressure_trim: -0.5 };
const B_SCALE: PiScale = PiScale { spring_scale: 0.94, arb_scale: 0.94, damping_scale: 0.95, power_multiplier: 0.88, pressure_trim: 0.0 };
const A_SCALE: PiScale = PiScale { spring_scale: 1.00, arb_scale: 1.00, damping_scale: 1.00, power_multiplier: 1.00, pressure_trim: 0.0 };
const S1_SCALE: PiScale = PiScale { spring_scale: 1.08, arb_scale: 1.06, damping_scale: 1.05, power_multiplier: 1.20, pressure_trim: 0.5 };
const S2_SCALE: PiScale = PiScale { spring_scale: 1.17, arb_scale: 1.12, damping_scale: 1.10, power_multiplier: 1.45, pressure_trim: 1.0 };
const X_SCALE: PiScale = PiScale { spring_scale: 1.27, arb_scale: 1.18, damping_scale: 1.15, power_multiplier: 1.75, pressure_trim: 1.5 };
