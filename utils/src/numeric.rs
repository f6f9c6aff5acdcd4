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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

pub fn is_valid_percentage(val: f64) -> bool {
    val.is_finite() && (0.0..=100.0).contains(&val)
}

/// True for finite values strictly greater than zero
pub fn is_positive(val: f64) -> bool {
    val.is_finite() && val > 0.0
}

/// True for finite values greater than or equal to zero
pub fn is_non_negative(val: f64) -> bool {
    val.is_finite() && val >= 0.0
}

#[cfg(test)]
mod tests {
    use crate::numeric::{is_non_negative, is_positive, is_valid_percentage, round_float_to};

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(2.08338, 2), 2.08);
        assert_eq!(round_float_to(2.085, 1), 2.1);
        assert_eq!(round_float_to(1.0, 3), 1.0);
        assert_eq!(round_float_to(0.0049, 2), 0.0);
    }

    #[test]
    fn valid_percentage_tests()  {
        assert_eq!(is_valid_percentage(-1.0), false);
        assert_eq!(is_valid_percentage(0.0), true);
        assert_eq!(is_valid_percentage(0.5), true);
        assert_eq!(is_valid_percentage(50.0), true);
        assert_eq!(is_valid_percentage(100.0), true);
        assert_eq!(is_valid_percentage(100.1), false);
        assert_eq!(is_valid_percentage(f64::NAN), false);
        assert_eq!(is_valid_percentage(f64::INFINITY), false);
    }

    #[test]
    fn sign_tests() {
        assert_eq!(is_positive(1.0), true);
        assert_eq!(is_positive(0.0), false);
        assert_eq!(is_positive(f64::INFINITY), false);
        assert_eq!(is_non_negative(0.0), true);
        assert_eq!(is_non_negative(-0.1), false);
        assert_eq!(is_non_negative(f64::NAN), false);
    }
}
