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

//! Differential baselines for every drivetrain and discipline, and the rules for
//! scaling them to a driving style and checking hand edited values.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::trace;
use utils::numeric::{clamp, is_within, round_float_to};
use crate::car::DriveType;
use crate::error::PropertyParseError;
use crate::tune_type::TuneType;

/// Hard bounds for any accel or decel lock percentage
pub const DIFF_LOCK_RANGE: (f64, f64) = (0.0, 90.0);
/// Hard bounds for the AWD centre balance (percentage of torque sent rearwards)
pub const CENTER_BALANCE_RANGE: (f64, f64) = (25.0, 75.0);
/// Centre balance outside of this window is legal but flagged
pub const CENTER_BALANCE_ADVISORY_RANGE: (f64, f64) = (35.0, 65.0);
pub const RWD_DECEL_ADVISORY_MAX: f64 = 60.0;
pub const RWD_ACCEL_ADVISORY_MIN: f64 = 20.0;
pub const FWD_ACCEL_ADVISORY_MAX: f64 = 60.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DiffLock {
    pub accel: f64,
    pub decel: f64
}

impl DiffLock {
    pub const fn new(accel: f64, decel: f64) -> DiffLock {
        DiffLock { accel, decel }
    }

    fn scaled(&self, multipliers: &StyleMultipliers) -> DiffLock {
        DiffLock {
            accel: scale_lock(self.accel, multipliers.accel),
            decel: scale_lock(self.decel, multipliers.decel)
        }
    }
}

/// Differential setup. Which differentials exist depends on the drivetrain, so each
/// drivetrain gets its own shape rather than one struct with fields left unused.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "drive_type")]
pub enum DifferentialSettings {
    #[serde(rename = "AWD")]
    Awd { front: DiffLock, rear: DiffLock, center_balance: f64 },
    #[serde(rename = "RWD")]
    Rwd(DiffLock),
    #[serde(rename = "FWD")]
    Fwd(DiffLock)
}

impl DifferentialSettings {
    pub fn drive_type(&self) -> DriveType {
        match self {
            DifferentialSettings::Awd { .. } => DriveType::AWD,
            DifferentialSettings::Rwd(_) => DriveType::RWD,
            DifferentialSettings::Fwd(_) => DriveType::FWD
        }
    }
}

impl Display for DifferentialSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DifferentialSettings::Awd { front, rear, center_balance } => {
                write!(f, "front {}/{}%, rear {}/{}%, centre {}% rear",
                       front.accel, front.decel, rear.accel, rear.decel, center_balance)
            }
            DifferentialSettings::Rwd(lock) | DifferentialSettings::Fwd(lock) => {
                write!(f, "accel {}%, decel {}%", lock.accel, lock.decel)
            }
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DifferentialBaseline {
    pub settings: DifferentialSettings,
    pub summary: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str]
}

/// How much the driver wants the differential to help or fight rotation
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStyle {
    Stable,
    #[default]
    Balanced,
    Aggressive
}

struct StyleMultipliers {
    accel: f64,
    decel: f64,
    center_shift: f64
}

impl DiffStyle {
    pub const STABLE_VALUE: &'static str = "stable";
    pub const BALANCED_VALUE: &'static str = "balanced";
    pub const AGGRESSIVE_VALUE: &'static str = "aggressive";

    pub const ALL: [DiffStyle; 3] = [DiffStyle::Stable, DiffStyle::Balanced, DiffStyle::Aggressive];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStyle::Stable => DiffStyle::STABLE_VALUE,
            DiffStyle::Balanced => DiffStyle::BALANCED_VALUE,
            DiffStyle::Aggressive => DiffStyle::AGGRESSIVE_VALUE
        }
    }

    /// Map a car's -2..=2 driving style (understeer bias .. oversteer bias) onto a diff style
    pub fn from_driving_style(driving_style: i8) -> DiffStyle {
        match driving_style {
            i8::MIN..=-1 => DiffStyle::Stable,
            0 => DiffStyle::Balanced,
            1..=i8::MAX => DiffStyle::Aggressive
        }
    }

    fn multipliers(&self) -> StyleMultipliers {
        match self {
            DiffStyle::Stable => StyleMultipliers { accel: 0.8, decel: 1.3, center_shift: -5.0 },
            DiffStyle::Balanced => StyleMultipliers { accel: 1.0, decel: 1.0, center_shift: 0.0 },
            DiffStyle::Aggressive => StyleMultipliers { accel: 1.3, decel: 0.7, center_shift: 5.0 }
        }
    }
}

impl FromStr for DiffStyle {
    type Err = PropertyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            DiffStyle::STABLE_VALUE => Ok(DiffStyle::Stable),
            DiffStyle::BALANCED_VALUE => Ok(DiffStyle::Balanced),
            DiffStyle::AGGRESSIVE_VALUE => Ok(DiffStyle::Aggressive),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

impl Display for DiffStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static RWD_GRIP: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Rwd(DiffLock::new(45.0, 20.0)),
    summary: "Moderate lock that puts power down without pushing the nose wide",
    pros: &["Predictable corner exits", "Stable on trail braking"],
    cons: &["Some inside wheel spin out of hairpins"]
};
static RWD_STREET: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Rwd(DiffLock::new(35.0, 15.0)),
    summary: "Open-ish setup that keeps the car forgiving on bumpy public roads",
    pros: &["Easy to drive", "Turns in freely"],
    cons: &["Loses drive on tight exits"]
};
static RWD_RACE: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Rwd(DiffLock::new(65.0, 15.0)),
    summary: "High accel lock for traction with a low decel lock so the car still rotates on entry",
    pros: &["Strong drive off corners", "Free rotation on entry"],
    cons: &["Can snap into power oversteer if throttle is rushed"]
};
static RWD_DRIFT: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Rwd(DiffLock::new(90.0, 40.0)),
    summary: "Near locked so both rear wheels spin together and angle is easy to hold",
    pros: &["Consistent slides", "Easy transitions"],
    cons: &["Understeers when gripping", "Heavy tyre wear"]
};
static RWD_DRAG: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Rwd(DiffLock::new(90.0, 10.0)),
    summary: "Fully committed accel lock so both rear tyres launch evenly",
    pros: &["Straight, even launches"],
    cons: &["Unsuitable for corners"]
};
static RWD_RALLY: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Rwd(DiffLock::new(50.0, 20.0)),
    summary: "Medium lock that keeps drive on loose surfaces without killing rotation",
    pros: &["Drive on gravel", "Throttle steerable"],
    cons: &["Tail happy on tarmac sections"]
};
static RWD_OFFROAD: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Rwd(DiffLock::new(40.0, 10.0)),
    summary: "Soft lock that lets each rear wheel find its own grip over rough ground",
    pros: &["Compliant over ruts", "Less snap on landings"],
    cons: &["Can get stuck with one wheel unloaded"]
};

static FWD_GRIP: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Fwd(DiffLock::new(30.0, 10.0)),
    summary: "Light accel lock to limit inside wheel spin without heavy torque steer",
    pros: &["Keeps front end pointed", "Little torque steer"],
    cons: &["Inside wheel spin on tight exits"]
};
static FWD_STREET: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Fwd(DiffLock::new(25.0, 5.0)),
    summary: "Almost open for light steering and relaxed driving",
    pros: &["Light steering", "Forgiving"],
    cons: &["Wheelspin under full throttle"]
};
static FWD_RACE: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Fwd(DiffLock::new(40.0, 15.0)),
    summary: "Firmer lock to pull the car out of corners",
    pros: &["Better exit traction"],
    cons: &["Adds understeer on throttle", "Some torque steer"]
};
static FWD_DRAG: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Fwd(DiffLock::new(60.0, 0.0)),
    summary: "High accel lock so both front tyres hook up off the line",
    pros: &["Even launches"],
    cons: &["Torque steer at launch"]
};
static FWD_RALLY: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Fwd(DiffLock::new(35.0, 10.0)),
    summary: "Moderate lock that claws through loose corners",
    pros: &["Pulls through gravel"],
    cons: &["Understeer on entry"]
};

static AWD_GRIP: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Awd {
        front: DiffLock::new(25.0, 5.0),
        rear: DiffLock::new(55.0, 20.0),
        center_balance: 65.0
    },
    summary: "Rear biased split with a loose front diff to fight AWD understeer",
    pros: &["Huge traction", "Neutral mid corner"],
    cons: &["Still pushes on very tight corners"]
};
static AWD_STREET: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Awd {
        front: DiffLock::new(20.0, 0.0),
        rear: DiffLock::new(45.0, 15.0),
        center_balance: 60.0
    },
    summary: "Mild rear bias for all weather security",
    pros: &["Very stable", "Easy to drive fast"],
    cons: &["Understeer when pushed"]
};
static AWD_RACE: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Awd {
        front: DiffLock::new(30.0, 10.0),
        rear: DiffLock::new(65.0, 25.0),
        center_balance: 65.0
    },
    summary: "Strong rear lock and rear biased centre for rotation with AWD drive",
    pros: &["Fast corner exits", "Rotates under power"],
    cons: &["Can oversteer on lift"]
};
static AWD_DRIFT: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Awd {
        front: DiffLock::new(50.0, 5.0),
        rear: DiffLock::new(90.0, 30.0),
        center_balance: 75.0
    },
    summary: "Maximum rear split with a locked rear diff so the car slides like a RWD car with front pull",
    pros: &["Pulls out of slides", "High angle is easy to hold"],
    cons: &["Hard to keep slow and tidy", "Heavy tyre wear"]
};
static AWD_DRAG: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Awd {
        front: DiffLock::new(60.0, 0.0),
        rear: DiffLock::new(80.0, 0.0),
        center_balance: 55.0
    },
    summary: "Near even split and high accel locks for clean launches",
    pros: &["Excellent launches"],
    cons: &["Unsuitable for corners"]
};
static AWD_RALLY: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Awd {
        front: DiffLock::new(40.0, 10.0),
        rear: DiffLock::new(60.0, 20.0),
        center_balance: 58.0
    },
    summary: "Balanced split with firm locks to find drive on every surface",
    pros: &["Drive on any surface", "Throttle adjustable"],
    cons: &["Heavier steering"]
};
static AWD_OFFROAD: DifferentialBaseline = DifferentialBaseline {
    settings: DifferentialSettings::Awd {
        front: DiffLock::new(45.0, 10.0),
        rear: DiffLock::new(65.0, 20.0),
        center_balance: 55.0
    },
    summary: "Firm locks front and rear to crawl out of ruts and sand",
    pros: &["Climbs well", "Drive with wheels in the air"],
    cons: &["Understeers on hard surfaces"]
};

/// Baseline differential for a drivetrain and discipline, or `None` when that
/// discipline isn't supported on that drivetrain.
pub fn get_baseline_differential(drive_type: DriveType, tune_type: TuneType) -> Option<&'static DifferentialBaseline> {
    match (drive_type, tune_type) {
        (DriveType::RWD, TuneType::Grip) => Some(&RWD_GRIP),
        (DriveType::RWD, TuneType::Street) => Some(&RWD_STREET),
        (DriveType::RWD, TuneType::Race) => Some(&RWD_RACE),
        (DriveType::RWD, TuneType::Drift) => Some(&RWD_DRIFT),
        (DriveType::RWD, TuneType::Drag) => Some(&RWD_DRAG),
        (DriveType::RWD, TuneType::Rally) => Some(&RWD_RALLY),
        (DriveType::RWD, TuneType::Offroad) => Some(&RWD_OFFROAD),
        (DriveType::FWD, TuneType::Grip) => Some(&FWD_GRIP),
        (DriveType::FWD, TuneType::Street) => Some(&FWD_STREET),
        (DriveType::FWD, TuneType::Race) => Some(&FWD_RACE),
        (DriveType::FWD, TuneType::Drift) => None,
        (DriveType::FWD, TuneType::Drag) => Some(&FWD_DRAG),
        (DriveType::FWD, TuneType::Rally) => Some(&FWD_RALLY),
        (DriveType::FWD, TuneType::Offroad) => None,
        (DriveType::AWD, TuneType::Grip) => Some(&AWD_GRIP),
        (DriveType::AWD, TuneType::Street) => Some(&AWD_STREET),
        (DriveType::AWD, TuneType::Race) => Some(&AWD_RACE),
        (DriveType::AWD, TuneType::Drift) => Some(&AWD_DRIFT),
        (DriveType::AWD, TuneType::Drag) => Some(&AWD_DRAG),
        (DriveType::AWD, TuneType::Rally) => Some(&AWD_RALLY),
        (DriveType::AWD, TuneType::Offroad) => Some(&AWD_OFFROAD)
    }
}

/// Baseline used when a discipline has no entry for the drivetrain. Every drivetrain
/// supports grip, so this always has an answer.
pub fn fallback_baseline(drive_type: DriveType) -> &'static DifferentialBaseline {
    match drive_type {
        DriveType::RWD => &RWD_GRIP,
        DriveType::FWD => &FWD_GRIP,
        DriveType::AWD => &AWD_GRIP
    }
}

fn scale_lock(value: f64, multiplier: f64) -> f64 {
    clamp(round_float_to(value * multiplier, 0), DIFF_LOCK_RANGE)
}

/// Apply the driving style multipliers to a baseline. The drivetrain is carried by the
/// baseline's settings. Values are rounded to whole percentages then clamped into
/// [`DIFF_LOCK_RANGE`] and [`CENTER_BALANCE_RANGE`].
pub fn scale_differential_for_driving_style(baseline: &DifferentialBaseline, style: DiffStyle) -> DifferentialSettings {
    let multipliers = style.multipliers();
    let scaled = match &baseline.settings {
        DifferentialSettings::Awd { front, rear, center_balance } => {
            DifferentialSettings::Awd {
                front: front.scaled(&multipliers),
                rear: rear.scaled(&multipliers),
                center_balance: clamp(round_float_to(center_balance + multipliers.center_shift, 0),
                                      CENTER_BALANCE_RANGE)
            }
        }
        DifferentialSettings::Rwd(lock) => DifferentialSettings::Rwd(lock.scaled(&multipliers)),
        DifferentialSettings::Fwd(lock) => DifferentialSettings::Fwd(lock.scaled(&multipliers))
    };
    trace!("Scaled {:?} for {} style to {:?}", baseline.settings, style, scaled);
    scaled
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DifferentialValidation {
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>
}

fn check_lock(label: &str, lock: &DiffLock, errors: &mut Vec<String>) {
    for (name, value) in [("accel", lock.accel), ("decel", lock.decel)] {
        if !is_within(value, DIFF_LOCK_RANGE) {
            errors.push(format!("{} {} lock {}% is outside {}-{}%",
                                label, name, value, DIFF_LOCK_RANGE.0, DIFF_LOCK_RANGE.1));
        }
    }
}

/// Check differential settings for a drivetrain. Values outside the hard bounds are
/// errors and make the settings invalid. Legal values that tend to drive badly are
/// only reported as warnings.
pub fn validate_differential_settings(settings: &DifferentialSettings, drive_type: DriveType) -> DifferentialValidation {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if settings.drive_type() != drive_type {
        errors.push(format!("{} differential settings supplied for a {} car", settings.drive_type(), drive_type));
    }

    match settings {
        DifferentialSettings::Awd { front, rear, center_balance } => {
            check_lock("Front", front, &mut errors);
            check_lock("Rear", rear, &mut errors);
            if !is_within(*center_balance, CENTER_BALANCE_RANGE) {
                errors.push(format!("Centre balance {}% is outside {}-{}%",
                                    center_balance, CENTER_BALANCE_RANGE.0, CENTER_BALANCE_RANGE.1));
            } else if !is_within(*center_balance, CENTER_BALANCE_ADVISORY_RANGE) {
                warnings.push(format!("Centre balance {}% is outside the usual {}-{}% window; expect {}",
                                      center_balance,
                                      CENTER_BALANCE_ADVISORY_RANGE.0,
                                      CENTER_BALANCE_ADVISORY_RANGE.1,
                                      if *center_balance > CENTER_BALANCE_ADVISORY_RANGE.1 {
                                          "oversteer under power"
                                      } else {
                                          "heavy understeer under power"
                                      }));
            }
            if front.accel > rear.accel {
                warnings.push(format!("Front accel lock {}% is higher than rear {}%, which adds understeer on throttle",
                                      front.accel, rear.accel));
            }
        }
        DifferentialSettings::Rwd(lock) => {
            check_lock("Rear", lock, &mut errors);
            if lock.decel > RWD_DECEL_ADVISORY_MAX {
                warnings.push(format!("Decel lock {}% above {}% makes the rear unstable when lifting or braking",
                                      lock.decel, RWD_DECEL_ADVISORY_MAX));
            }
            if lock.accel < RWD_ACCEL_ADVISORY_MIN {
                warnings.push(format!("Accel lock {}% below {}% lets the inside rear spin up out of slow corners",
                                      lock.accel, RWD_ACCEL_ADVISORY_MIN));
            }
        }
        DifferentialSettings::Fwd(lock) => {
            check_lock("Front", lock, &mut errors);
            if lock.accel > FWD_ACCEL_ADVISORY_MAX {
                warnings.push(format!("Accel lock {}% above {}% causes torque steer and understeer on throttle",
                                      lock.accel, FWD_ACCEL_ADVISORY_MAX));
            }
        }
    }

    DifferentialValidation { valid: errors.is_empty(), warnings, errors }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DifferentialRecommendation {
    pub settings: DifferentialSettings,
    pub baseline: &'static DifferentialBaseline,
    pub explanation: String,
    pub tips: Vec<String>
}

fn style_tips(drive_type: DriveType, style: DiffStyle) -> Vec<String> {
    let mut tips = Vec::new();
    match style {
        DiffStyle::Stable => {
            tips.push("Less accel lock trades some exit speed for a calmer rear end".to_string());
            tips.push("Extra decel lock keeps the car straight under braking".to_string());
        }
        DiffStyle::Balanced => {
            tips.push("Start here and move accel lock in 5% steps to tune exit behaviour".to_string());
        }
        DiffStyle::Aggressive => {
            tips.push("More accel lock means more power oversteer; squeeze the throttle on exit".to_string());
            tips.push("Less decel lock lets the car rotate on corner entry".to_string());
        }
    }
    match drive_type {
        DriveType::AWD => {
            tips.push("Move the centre balance rearward for rotation or forward for stability".to_string());
        }
        DriveType::RWD => {
            tips.push("If the inside rear spins on exit add accel lock; if the car snaps wide remove it".to_string());
        }
        DriveType::FWD => {
            tips.push("If the car washes wide on throttle reduce accel lock before touching the springs".to_string());
        }
    }
    tips
}

fn discipline_tip(tune_type: TuneType) -> Option<&'static str> {
    if tune_type.is_loose_surface() {
        return Some("Loose surfaces reward firmer locks than tarmac");
    }
    match tune_type {
        TuneType::Drift => Some("Keep accel lock near the top of the range for consistent angle"),
        TuneType::Drag => Some("High accel lock keeps both driven wheels hooked up off the line"),
        _ => None
    }
}

/// Baseline for the combination scaled to `style`, with an explanation and driving tips.
/// `None` when no baseline exists for the drivetrain and discipline.
pub fn get_differential_recommendation(drive_type: DriveType,
                                       tune_type: TuneType,
                                       style: DiffStyle) -> Option<DifferentialRecommendation> {
    let baseline = get_baseline_differential(drive_type, tune_type)?;
    let settings = scale_differential_for_driving_style(baseline, style);
    let explanation = format!("{} {} baseline ({}) adjusted for a {} driving style. {}.",
                              drive_type, tune_type, baseline.settings, style, baseline.summary);
    let mut tips = style_tips(drive_type, style);
    if let Some(tip) = discipline_tip(tune_type) {
        tips.push(tip.to_string());
    }
    tips.extend(validate_differential_settings(&settings, drive_type).warnings);
    Some(DifferentialRecommendation { settings, baseline, explanation, tips })
}

#[cfg(test)]
mod tests {
    use crate::car::DriveType;
    use crate::differential::*;
    use crate::tune_type::TuneType;

    fn rwd_lock(settings: DifferentialSettings) -> DiffLock {
        match settings {
            DifferentialSettings::Rwd(lock) => lock,
            other => panic!("expected RWD settings, got {:?}", other)
        }
    }

    #[test]
    fn rwd_race_baseline() {
        let baseline = get_baseline_differential(DriveType::RWD, TuneType::Race).unwrap();
        assert_eq!(baseline.settings, DifferentialSettings::Rwd(DiffLock::new(65.0, 15.0)));
    }

    #[test]
    fn rwd_race_aggressive() {
        let baseline = get_baseline_differential(DriveType::RWD, TuneType::Race).unwrap();
        let lock = rwd_lock(scale_differential_for_driving_style(baseline, DiffStyle::Aggressive));
        assert_eq!(lock.accel, 85.0);
        assert_eq!(lock.decel, 11.0);
    }

    #[test]
    fn rwd_race_stable() {
        let baseline = get_baseline_differential(DriveType::RWD, TuneType::Race).unwrap();
        let lock = rwd_lock(scale_differential_for_driving_style(baseline, DiffStyle::Stable));
        assert_eq!(lock.accel, 52.0);
        assert_eq!(lock.decel, 20.0);
    }

    #[test]
    fn balanced_is_identity() {
        for drive_type in DriveType::ALL {
            for tune_type in TuneType::ALL {
                if let Some(baseline) = get_baseline_differential(drive_type, tune_type) {
                    let scaled = scale_differential_for_driving_style(baseline, DiffStyle::Balanced);
                    assert_eq!(scaled, baseline.settings, "{} {}", drive_type, tune_type);
                }
            }
        }
    }

    #[test]
    fn scaled_values_are_clamped() {
        let baseline = get_baseline_differential(DriveType::RWD, TuneType::Drift).unwrap();
        let lock = rwd_lock(scale_differential_for_driving_style(baseline, DiffStyle::Aggressive));
        assert_eq!(lock.accel, 90.0, "90 * 1.3 is capped");

        let baseline = get_baseline_differential(DriveType::AWD, TuneType::Drift).unwrap();
        match scale_differential_for_driving_style(baseline, DiffStyle::Aggressive) {
            DifferentialSettings::Awd { rear, center_balance, .. } => {
                assert_eq!(center_balance, 75.0, "75 + 5 is capped");
                assert_eq!(rear.accel, 90.0);
            }
            other => panic!("expected AWD settings, got {:?}", other)
        }
    }

    #[test]
    fn baselines_match_drive_type() {
        for drive_type in DriveType::ALL {
            for tune_type in TuneType::ALL {
                if let Some(baseline) = get_baseline_differential(drive_type, tune_type) {
                    assert_eq!(baseline.settings.drive_type(), drive_type);
                    let report = validate_differential_settings(&baseline.settings, drive_type);
                    assert!(report.valid, "{} {} baseline invalid: {:?}", drive_type, tune_type, report.errors);
                }
            }
        }
    }

    #[test]
    fn unsupported_combinations() {
        assert!(get_baseline_differential(DriveType::FWD, TuneType::Drift).is_none());
        assert!(get_baseline_differential(DriveType::FWD, TuneType::Offroad).is_none());
        assert!(get_differential_recommendation(DriveType::FWD, TuneType::Drift, DiffStyle::Balanced).is_none());
    }

    #[test]
    fn fallback_is_the_grip_baseline() {
        for drive_type in DriveType::ALL {
            let grip = get_baseline_differential(drive_type, TuneType::Grip).unwrap();
            assert!(std::ptr::eq(fallback_baseline(drive_type), grip));
        }
    }

    #[test]
    fn validation_errors_invalidate() {
        let report = validate_differential_settings(&DifferentialSettings::Rwd(DiffLock::new(95.0, -1.0)),
                                                    DriveType::RWD);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);

        let report = validate_differential_settings(&DifferentialSettings::Awd {
            front: DiffLock::new(20.0, 0.0),
            rear: DiffLock::new(50.0, 10.0),
            center_balance: 80.0
        }, DriveType::AWD);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn validation_warnings_stay_valid() {
        let report = validate_differential_settings(&DifferentialSettings::Rwd(DiffLock::new(50.0, 70.0)),
                                                    DriveType::RWD);
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.errors.is_empty());

        let report = validate_differential_settings(&DifferentialSettings::Awd {
            front: DiffLock::new(20.0, 0.0),
            rear: DiffLock::new(50.0, 10.0),
            center_balance: 70.0
        }, DriveType::AWD);
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn validation_rejects_wrong_shape() {
        let report = validate_differential_settings(&DifferentialSettings::Fwd(DiffLock::new(30.0, 10.0)),
                                                    DriveType::RWD);
        assert!(!report.valid);
    }

    #[test]
    fn recommendation_contents() {
        let recommendation = get_differential_recommendation(DriveType::AWD,
                                                             TuneType::Rally,
                                                             DiffStyle::Stable).unwrap();
        match recommendation.settings {
            DifferentialSettings::Awd { front, rear, center_balance } => {
                assert_eq!(front, DiffLock::new(32.0, 13.0));
                assert_eq!(rear, DiffLock::new(48.0, 26.0));
                assert_eq!(center_balance, 53.0);
            }
            other => panic!("expected AWD settings, got {:?}", other)
        }
        assert!(recommendation.explanation.contains("AWD rally"));
        assert!(!recommendation.tips.is_empty());
        assert!(std::ptr::eq(recommendation.baseline,
                             get_baseline_differential(DriveType::AWD, TuneType::Rally).unwrap()));
    }

    #[test]
    fn driving_style_mapping() {
        assert_eq!(DiffStyle::from_driving_style(-2), DiffStyle::Stable);
        assert_eq!(DiffStyle::from_driving_style(-1), DiffStyle::Stable);
        assert_eq!(DiffStyle::from_driving_style(0), DiffStyle::Balanced);
        assert_eq!(DiffStyle::from_driving_style(2), DiffStyle::Aggressive);
    }

    #[test]
    fn loose_surface_tip() {
        for tune_type in TuneType::ALL {
            let recommendation = get_differential_recommendation(DriveType::RWD, tune_type, DiffStyle::Balanced).unwrap();
            let has_tip = recommendation.tips.iter().any(|tip| tip.starts_with("Loose surfaces"));
            assert_eq!(has_tip, tune_type.is_loose_surface(), "{}", tune_type);
        }
    }
}
