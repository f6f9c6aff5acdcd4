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

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::{debug, info, warn};
use utils::numeric::{is_non_negative, is_valid_percentage};
use utils::units::percentage_to_fraction;

use crate::catalog::{GaugeCatalog, GaugeEntry};
use crate::conductor::{voltage_drop, wire_weight};
use crate::error::PlanError;
use crate::selector::{SelectionRequest, VoltageLimit};

/// What the gauge choice is optimised for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Thinnest (lightest) wire that carries the load
    Weight,
    /// Thinnest wire that carries the load within a voltage drop budget
    Voltage
}

impl OpMode {
    pub const WEIGHT_STRING: &'static str = "weight";
    pub const VOLTAGE_STRING: &'static str = "voltage";

    pub fn as_str(&self) -> &'static str {
        match self {
            OpMode::Weight => OpMode::WEIGHT_STRING,
            OpMode::Voltage => OpMode::VOLTAGE_STRING
        }
    }
}

impl FromStr for OpMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            OpMode::WEIGHT_STRING => Ok(OpMode::Weight),
            OpMode::VOLTAGE_STRING => Ok(OpMode::Voltage),
            _ => Err(format!("Unknown operation mode '{}'", s))
        }
    }
}

impl Display for OpMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TetherRequirements {
    /// Maximum current (A) drawn through the tether
    pub peak_current: f64,
    /// Percentage of the peak current drawn at hover
    pub hover_load_pct: f64,
    /// Length (m) of the tether
    pub wire_length: f64,
    /// Only present when optimising for voltage
    pub max_voltage_drop: Option<f64>,
    pub motor_voltage: Option<f64>,
    /// Weight (kg) of the drone without the tether
    pub drone_weight: Option<f64>
}

impl TetherRequirements {
    pub fn new(peak_current: f64, hover_load_pct: f64, wire_length: f64) -> TetherRequirements {
        TetherRequirements {
            peak_current,
            hover_load_pct,
            wire_length,
            max_voltage_drop: None,
            motor_voltage: None,
            drone_weight: None
        }
    }

    pub fn op_mode(&self) -> OpMode {
        match self.max_voltage_drop {
            None => OpMode::Weight,
            Some(_) => OpMode::Voltage
        }
    }

    /// The average current the tether carries while hovering
    pub fn average_current(&self) -> f64 {
        self.peak_current * percentage_to_fraction(self.hover_load_pct)
    }

    /// Gauges are rated against the average current while voltage drop is
    /// evaluated at the peak current
    pub fn selection_request(&self) -> SelectionRequest {
        let request = SelectionRequest::new(self.average_current());
        match self.max_voltage_drop {
            None => request,
            Some(max_drop) => request.with_voltage_limit(
                VoltageLimit::new(self.peak_current, self.wire_length, max_drop)
            )
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        check_non_negative("current", self.peak_current)?;
        check_non_negative("distance", self.wire_length)?;
        if !is_valid_percentage(self.hover_load_pct) {
            return Err(PlanError::InvalidRequirement(
                "load".to_string(),
                format!("hover load must be between 0 and 100%, got {}", self.hover_load_pct)
            ));
        }
        if let Some(max_drop) = self.max_voltage_drop {
            check_non_negative("voltage", max_drop)?;
        }
        if let Some(motor_voltage) = self.motor_voltage {
            check_non_negative("motor voltage", motor_voltage)?;
        }
        if let Some(drone_weight) = self.drone_weight {
            check_non_negative("drone weight", drone_weight)?;
        }
        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), PlanError> {
    match is_non_negative(value) {
        true => Ok(()),
        false => Err(PlanError::InvalidRequirement(
            name.to_string(),
            format!("must be a finite value >= 0, got {}", value)
        ))
    }
}

/// How a single catalog entry fares against a set of requirements
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateAssessment<'a> {
    pub entry: &'a GaugeEntry,
    pub voltage_drop: f64,
    pub wire_weight: f64,
    pub accepted: bool
}

pub fn assess_candidates<'a>(catalog: &'a GaugeCatalog,
                             requirements: &TetherRequirements) -> Vec<CandidateAssessment<'a>> {
    let request = requirements.selection_request();
    catalog.iter().map(|entry| {
        CandidateAssessment {
            entry,
            voltage_drop: voltage_drop(requirements.peak_current, requirements.wire_length, entry.thickness()),
            wire_weight: wire_weight(entry.thickness(), requirements.wire_length),
            accepted: request.accepts(entry)
        }
    }).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TetherPlan {
    gauge: GaugeEntry,
    requirements: TetherRequirements,
    voltage_drop: f64,
    wire_weight: f64,
    manually_selected: bool
}

impl TetherPlan {
    fn new(gauge: &GaugeEntry, requirements: &TetherRequirements, manually_selected: bool) -> TetherPlan {
        TetherPlan {
            gauge: gauge.clone(),
            requirements: requirements.clone(),
            voltage_drop: voltage_drop(requirements.peak_current, requirements.wire_length, gauge.thickness()),
            wire_weight: wire_weight(gauge.thickness(), requirements.wire_length),
            manually_selected
        }
    }

    pub fn gauge(&self) -> &GaugeEntry {
        &self.gauge
    }

    pub fn requirements(&self) -> &TetherRequirements {
        &self.requirements
    }

    /// Voltage drop (V) along the tether at peak current
    pub fn voltage_drop(&self) -> f64 {
        self.voltage_drop
    }

    /// Weight (kg) of the tether
    pub fn wire_weight(&self) -> f64 {
        self.wire_weight
    }

    pub fn is_manually_selected(&self) -> bool {
        self.manually_selected
    }

    /// True if the gauge is rated below the average current it will carry
    pub fn is_overloaded(&self) -> bool {
        !self.gauge.can_carry(self.requirements.average_current())
    }

    /// True if the drop exceeds the requested voltage budget
    pub fn exceeds_voltage_limit(&self) -> bool {
        match self.requirements.max_voltage_drop {
            None => false,
            Some(max_drop) => self.voltage_drop > max_drop
        }
    }

    /// Maximum distance (m) the drone can fly from the ground station
    pub fn range(&self) -> f64 {
        self.requirements.wire_length / 2.0
    }

    pub fn total_weight(&self) -> Option<f64> {
        self.requirements.drone_weight.map(|w| w + self.wire_weight)
    }

    /// Voltage the ground station must supply to deliver the motor voltage at the drone
    pub fn supply_voltage(&self) -> Option<f64> {
        self.requirements.motor_voltage.map(|v| v + self.voltage_drop)
    }
}

/// Choose the thinnest suitable gauge from `catalog` for `requirements`
pub fn plan_tether(catalog: &GaugeCatalog, requirements: &TetherRequirements) -> Result<TetherPlan, PlanError> {
    requirements.validate()?;
    let request = requirements.selection_request();
    debug!("Selecting gauge for {:?}", request);
    match request.select(catalog) {
        Some(gauge) => {
            info!("Selected gauge {} for {:.2}A average current in {} mode",
                  gauge.gauge(), request.required_current(), requirements.op_mode());
            Ok(TetherPlan::new(gauge, requirements, false))
        }
        None => {
            warn!("No suitable gauge for {:?}", request);
            match requirements.max_voltage_drop {
                None => Err(PlanError::NoSuitableGauge {
                    required_current: request.required_current()
                }),
                Some(max_voltage_drop) => Err(PlanError::NoGaugeWithinDrop {
                    required_current: request.required_current(),
                    max_voltage_drop
                })
            }
        }
    }
}

/// Evaluate a specific gauge from `catalog` against `requirements`.
///
/// The gauge is used even if it doesn't meet the requirements. Check
/// [TetherPlan::is_overloaded] and [TetherPlan::exceeds_voltage_limit].
pub fn plan_with_gauge(catalog: &GaugeCatalog,
                       requirements: &TetherRequirements,
                       gauge: &str) -> Result<TetherPlan, PlanError> {
    requirements.validate()?;
    let entry = catalog.get(gauge.trim()).ok_or_else(|| PlanError::UnknownGauge(gauge.to_string()))?;
    let plan = TetherPlan::new(entry, requirements, true);
    if plan.is_overloaded() {
        warn!("Gauge {} is rated for {}A but will carry {:.2}A", entry.gauge(), entry.rated_current(), requirements.average_current());
    }
    Ok(plan)
}
