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

pub const MILLI: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

pub fn mah_to_ah(capacity_mah: f64) -> f64 {
    capacity_mah / MILLI
}

/// Convert a percentage (0-100) into a fraction (0.0-1.0)
pub fn percentage_to_fraction(percentage: f64) -> f64 {
    percentage / 100.0
}

pub fn hours_to_minutes(hours: f64) -> f64 {
    hours * MINUTES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use crate::units::{hours_to_minutes, mah_to_ah, percentage_to_fraction};

    #[test]
    fn capacity_conversion() {
        assert_eq!(mah_to_ah(5000.0), 5.0);
        assert_eq!(mah_to_ah(0.0), 0.0);
        assert_eq!(mah_to_ah(1500.0), 1.5);
    }

    #[test]
    fn percentage_conversion() {
        assert_eq!(percentage_to_fraction(100.0), 1.0);
        assert_eq!(percentage_to_fraction(50.0), 0.5);
        assert_eq!(percentage_to_fraction(0.0), 0.0);
    }

    #[test]
    fn time_conversion() {
        assert_eq!(hours_to_minutes(0.5), 30.0);
        assert_eq!(hours_to_minutes(2.0), 120.0);
    }
}
