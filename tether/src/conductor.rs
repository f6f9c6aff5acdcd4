/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of drone-calc.
 *
 * drone-calc is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * drone-calc is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with drone-calc. If not, see <https://www.gnu.org/licenses/>.
 */

/// Resistivity of copper (Ω·m)
pub const CU_RESISTIVITY: f64 = 1.724e-8;
/// Density of copper (kg/m³)
pub const CU_DENSITY: f64 = 8960.0;

/// Voltage lost across a tether carrying `current` (A) over `distance` (m)
/// with a conductor cross-section of `thickness` (m²).
///
/// The distance is doubled to account for both the supply and return conductors.
/// `thickness` must be greater than zero.
pub fn voltage_drop(current: f64, distance: f64, thickness: f64) -> f64 {
    2.0 * current * distance * CU_RESISTIVITY / thickness
}

/// Mass (kg) of a copper conductor with a cross-section of `thickness` (m²)
/// that is `distance` (m) long
pub fn wire_weight(thickness: f64, distance: f64) -> f64 {
    CU_DENSITY * thickness * distance
}

#[cfg(test)]
mod tests {
    use crate::conductor::{voltage_drop, wire_weight};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn voltage_drop_matches_formula() {
        let expected = 2.0 * 20.0 * 10.0 * 1.724e-8 / 3.31e-6;
        let drop = voltage_drop(20.0, 10.0, 3.31e-6);
        assert!((drop - expected).abs() < EPSILON);
        assert!((drop - 2.0834).abs() < 1e-4, "got {}", drop);
    }

    #[test]
    fn voltage_drop_is_monotonic() {
        let base = voltage_drop(20.0, 10.0, 5.26e-6);
        assert!(voltage_drop(25.0, 10.0, 5.26e-6) > base);
        assert!(voltage_drop(20.0, 15.0, 5.26e-6) > base);
        assert!(voltage_drop(20.0, 10.0, 8.37e-6) < base);
        assert!(voltage_drop(20.0, 10.0, 3.31e-6) > base);
    }

    #[test]
    fn voltage_drop_zero_inputs() {
        assert_eq!(voltage_drop(0.0, 10.0, 5.26e-6), 0.0);
        assert_eq!(voltage_drop(20.0, 0.0, 5.26e-6), 0.0);
    }

    #[test]
    fn wire_weight_matches_formula() {
        // 10m of 6 AWG
        let weight = wire_weight(1.33e-5, 10.0);
        assert!((weight - 1.19168).abs() < 1e-9, "got {}", weight);
        assert_eq!(wire_weight(1.33e-5, 0.0), 0.0);
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(voltage_drop(45.0, 50.0, 1.33e-5), voltage_drop(45.0, 50.0, 1.33e-5));
        assert_eq!(wire_weight(2.67e-5, 25.0), wire_weight(2.67e-5, 25.0));
    }
}
