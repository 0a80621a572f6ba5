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

//! Independent formula functions for each part of a tune. Each one is pure and takes
//! only what it needs from the car, the discipline and the PI class scale.

pub mod aero;
pub mod alignment;
pub mod anti_roll;
pub mod brakes;
pub mod damping;
pub mod gearing;
pub mod ride_height;
pub mod springs;
pub mod tyres;

use serde::Serialize;

/// A value set per axle
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AxlePair {
    pub front: f64,
    pub rear: f64
}

impl AxlePair {
    pub const fn new(front: f64, rear: f64) -> AxlePair {
        AxlePair { front, rear }
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> AxlePair {
        AxlePair { front: f(self.front), rear: f(self.rear) }
    }
}
