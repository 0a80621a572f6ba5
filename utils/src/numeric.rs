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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// Restrict `val` to the inclusive `(min, max)` range. NaN is passed through untouched.
pub fn clamp(val: f64, range: (f64, f64)) -> f64 {
    let (min, max) = range;
    if val < min {
        return min;
    }
    if val > max {
        return max;
    }
    val
}

pub fn is_within(val: f64, range: (f64, f64)) -> bool {
    val >= range.0 && val <= range.1
}

/// Linear interpolation between the ends of `range`. `position` of 0.0 yields the
/// lower end and 1.0 the upper end.
pub fn lerp(range: (f64, f64), position: f64) -> f64 {
    range.0 + (range.1 - range.0) * position
}

pub fn is_valid_percentage(val: f64) -> bool {
    if val >= 0.0 && val <= 100.0 {
        return true;
    }
    false
}
