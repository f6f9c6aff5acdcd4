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

use tracing::debug;
use utils::numeric::{is_non_negative, is_positive, is_valid_percentage};
use utils::units::{hours_to_minutes, mah_to_ah, percentage_to_fraction};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BatteryError {
    #[error("invalid battery capacity {0}mAh")]
    InvalidCapacity(f64),
    #[error("invalid motor amperage {0}A")]
    InvalidMotorAmps(f64),
    #[error("hover load must be between 0 and 100%, got {0}")]
    InvalidHoverLoad(f64),
    #[error("the motors draw no current at hover")]
    NoHoverCurrent
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorLoad {
    pub motor_count: u32,
    /// Maximum current (A) drawn by each motor
    pub motor_amps: f64,
    /// Percentage of the maximum current drawn at hover
    pub hover_load_pct: f64
}

impl MotorLoad {
    pub fn new(motor_count: u32, motor_amps: f64, hover_load_pct: f64) -> MotorLoad {
        MotorLoad { motor_count, motor_amps, hover_load_pct }
    }

    /// Total current (A) drawn by every motor while hovering
    pub fn hover_current(&self) -> f64 {
        self.motor_amps * self.motor_count as f64 * percentage_to_fraction(self.hover_load_pct)
    }

    fn validate(&self) -> Result<(), BatteryError> {
        if !is_non_negative(self.motor_amps) {
            return Err(BatteryError::InvalidMotorAmps(self.motor_amps));
        }
        if !is_valid_percentage(self.hover_load_pct) {
            return Err(BatteryError::InvalidHoverLoad(self.hover_load_pct));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Battery {
    pub capacity_mah: f64
}

impl Battery {
    pub fn new(capacity_mah: f64) -> Battery {
        Battery { capacity_mah }
    }

    pub fn capacity_ah(&self) -> f64 {
        mah_to_ah(self.capacity_mah)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightTime {
    hours: f64
}

impl FlightTime {
    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn minutes(&self) -> f64 {
        hours_to_minutes(self.hours)
    }
}

/// Estimate how long `battery` can keep a drone hovering under `load`
pub fn flight_time(battery: &Battery, load: &MotorLoad) -> Result<FlightTime, BatteryError> {
    if !is_positive(battery.capacity_mah) {
        return Err(BatteryError::InvalidCapacity(battery.capacity_mah));
    }
    load.validate()?;
    let hover_current = load.hover_current();
    if !is_positive(hover_current) {
        return Err(BatteryError::NoHoverCurrent);
    }
    let hours = battery.capacity_ah() / hover_current;
    debug!("{:.3}Ah at {:.3}A hover current lasts {:.3}h", battery.capacity_ah(), hover_current, hours);
    Ok(FlightTime { hours })
}

#[cfg(test)]
mod tests {
    use crate::{flight_time, Battery, BatteryError, MotorLoad};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn quad_hover() {
        // 4 motors at 20A hovering at 50% draw 40A from a 10Ah pack
        let time = flight_time(&Battery::new(10000.0), &MotorLoad::new(4, 20.0, 50.0)).unwrap();
        assert!((time.hours() - 0.25).abs() < EPSILON);
        assert!((time.minutes() - 15.0).abs() < EPSILON);
    }

    #[test]
    fn hover_current() {
        let load = MotorLoad::new(6, 12.5, 40.0);
        assert!((load.hover_current() - 30.0).abs() < EPSILON);
        assert_eq!(MotorLoad::new(0, 12.5, 40.0).hover_current(), 0.0);
    }

    #[test]
    fn more_load_means_less_time() {
        let battery = Battery::new(5200.0);
        let light = flight_time(&battery, &MotorLoad::new(4, 30.0, 30.0)).unwrap();
        let heavy = flight_time(&battery, &MotorLoad::new(4, 30.0, 60.0)).unwrap();
        assert!(heavy.hours() < light.hours());
        assert!((light.hours() - 2.0 * heavy.hours()).abs() < EPSILON);
    }

    #[test]
    fn invalid_inputs() {
        let battery = Battery::new(5000.0);
        assert_eq!(flight_time(&battery, &MotorLoad::new(4, 20.0, 0.0)), Err(BatteryError::NoHoverCurrent));
        assert_eq!(flight_time(&battery, &MotorLoad::new(0, 20.0, 50.0)), Err(BatteryError::NoHoverCurrent));
        assert_eq!(flight_time(&battery, &MotorLoad::new(4, 20.0, 150.0)), Err(BatteryError::InvalidHoverLoad(150.0)));
        assert_eq!(flight_time(&battery, &MotorLoad::new(4, -2.0, 50.0)), Err(BatteryError::InvalidMotorAmps(-2.0)));
        assert_eq!(flight_time(&Battery::new(-1.0), &MotorLoad::new(4, 20.0, 50.0)), Err(BatteryError::InvalidCapacity(-1.0)));
    }

    #[test]
    fn empty_battery_is_rejected() {
        let load = MotorLoad::new(4, 20.0, 50.0);
        assert_eq!(flight_time(&Battery::new(0.0), &load), Err(BatteryError::InvalidCapacity(0.0)));
        assert!(flight_time(&Battery::new(f64::NAN), &load).is_err());
    }
}
