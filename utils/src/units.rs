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

//! Plain conversions between the imperial units the engine works in and their metric
//! counterparts. None of these round; callers round for display.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

pub const PSI_PER_BAR: f64 = 14.503_773_773;
/// kgf/mm for one lb/in
pub const KGF_MM_PER_LB_IN: f64 = 0.453_592_37 / 25.4;
pub const KG_PER_LB: f64 = 0.453_592_37;
pub const CM_PER_INCH: f64 = 2.54;
pub const KW_PER_HP: f64 = 0.745_699_872;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric"
        }
    }

    pub fn pressure_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "psi",
            UnitSystem::Metric => "bar"
        }
    }

    pub fn spring_rate_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lb/in",
            UnitSystem::Metric => "kgf/mm"
        }
    }

    pub fn length_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "cm"
        }
    }

    pub fn mass_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lb",
            UnitSystem::Metric => "kg"
        }
    }

    pub fn pressure_from_psi(&self, psi: f64) -> f64 {
        match self {
            UnitSystem::Imperial => psi,
            UnitSystem::Metric => psi_to_bar(psi)
        }
    }

    pub fn spring_rate_from_lb_in(&self, rate: f64) -> f64 {
        match self {
            UnitSystem::Imperial => rate,
            UnitSystem::Metric => lb_in_to_kgf_mm(rate)
        }
    }

    pub fn length_from_inches(&self, length: f64) -> f64 {
        match self {
            UnitSystem::Imperial => length,
            UnitSystem::Metric => inches_to_cm(length)
        }
    }

    pub fn mass_from_lb(&self, mass: f64) -> f64 {
        match self {
            UnitSystem::Imperial => mass,
            UnitSystem::Metric => lb_to_kg(mass)
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            _ => Err(format!("Unknown unit system '{}'", s))
        }
    }
}

impl Display for UnitSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn psi_to_bar(psi: f64) -> f64 {
    psi / PSI_PER_BAR
}

pub fn bar_to_psi(bar: f64) -> f64 {
    bar * PSI_PER_BAR
}

pub fn lb_in_to_kgf_mm(rate: f64) -> f64 {
    rate * KGF_MM_PER_LB_IN
}

pub fn kgf_mm_to_lb_in(rate: f64) -> f64 {
    rate / KGF_MM_PER_LB_IN
}

pub fn lb_to_kg(mass: f64) -> f64 {
    mass * KG_PER_LB
}

pub fn kg_to_lb(mass: f64) -> f64 {
    mass / KG_PER_LB
}

pub fn inches_to_cm(length: f64) -> f64 {
    length * CM_PER_INCH
}

pub fn cm_to_inches(length: f64) -> f64 {
    length / CM_PER_INCH
}

pub fn hp_to_kw(power_hp: f64) -> f64 {
    power_hp * KW_PER_HP
}

pub fn kw_to_hp(power_kw: f64) -> f64 {
    power_kw / KW_PER_HP
}

#[cfg(test)]
mod tests {
    use crate::units::*;

    fn assert_close(a: f64, b: f64) {
        let tolerance = 1e-9 * f64::max(1.0, b.abs());
        assert!((a - b).abs() <= tolerance, "{} != {}", a, b);
    }

    #[test]
    fn pressure_round_trip() {
        for x in [0.0, 1.0, 14.0, 28.5, 55.0, -3.2, 1.0e6, 1.0e-6] {
            assert_close(psi_to_bar(bar_to_psi(x)), x);
            assert_close(bar_to_psi(psi_to_bar(x)), x);
        }
    }

    #[test]
    fn known_values() {
        assert_close(bar_to_psi(1.0), 14.503773773);
        assert_close(lb_to_kg(1000.0), 453.59237);
        assert_close(inches_to_cm(10.0), 25.4);
        assert_close(hp_to_kw(400.0), 298.2799488);
        assert!((lb_in_to_kgf_mm(100.0) - 1.7858).abs() < 1e-4);
    }

    #[test]
    fn other_round_trips() {
        for x in [0.5, 100.0, 650.0, 3200.0] {
            assert_close(kgf_mm_to_lb_in(lb_in_to_kgf_mm(x)), x);
            assert_close(kg_to_lb(lb_to_kg(x)), x);
            assert_close(cm_to_inches(inches_to_cm(x)), x);
            assert_close(kw_to_hp(hp_to_kw(x)), x);
        }
    }

    #[test]
    fn non_finite_values_propagate() {
        assert!(psi_to_bar(f64::NAN).is_nan());
        assert_eq!(bar_to_psi(f64::INFINITY), f64::INFINITY);
        assert_eq!(lb_to_kg(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn unit_system_conversions() {
        assert_eq!(UnitSystem::Imperial.pressure_from_psi(30.0), 30.0);
        assert_close(UnitSystem::Metric.pressure_from_psi(30.0), psi_to_bar(30.0));
        assert_close(UnitSystem::Metric.length_from_inches(4.0), 10.16);
        assert_eq!(UnitSystem::Metric.pressure_unit(), "bar");
        assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
    }

    #[test]
    fn parse_unit_system() -> Result<(), String> {
        assert_eq!(UnitSystem::from_str("Metric")?, UnitSystem::Metric);
        assert_eq!(UnitSystem::from_str("imperial")?, UnitSystem::Imperial);
        assert!(UnitSystem::from_str("furlongs").is_err());
        Ok(())
    }
}
