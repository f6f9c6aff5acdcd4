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

pub mod colour;

use battery::{flight_time, Battery, FlightTime, MotorLoad};
use tether::{CandidateAssessment, GaugeCatalog, TetherPlan};
use utils::numeric::round_float_to;

pub use colour::Palette;

/// How much detail to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Bare values only
    Quiet = 0,
    /// A single line
    Terse = 1,
    Summary = 2,
    /// Summary plus the inputs it was calculated from
    Detailed = 3,
    Full = 4
}

impl From<u8> for Verbosity {
    fn from(value: u8) -> Self {
        match value {
            0 => Verbosity::Quiet,
            1 => Verbosity::Terse,
            2 => Verbosity::Summary,
            3 => Verbosity::Detailed,
            _ => Verbosity::Full
        }
    }
}

fn section(palette: &Palette, title: &str) -> String {
    palette.value(format!("***{}***", title))
}

fn sentence(palette: &Palette, label: &str, value: impl std::fmt::Display) -> String {
    format!("{} {}{}", palette.label(label), palette.value(value), palette.label("."))
}

pub fn render_battery(battery: &Battery,
                      load: &MotorLoad,
                      time: &FlightTime,
                      verbosity: Verbosity,
                      palette: &Palette) -> String {
    if verbosity == Verbosity::Quiet {
        return round_float_to(time.hours(), 2).to_string();
    }
    let flight_time_line = sentence(palette, "YOUR BATTERY WILL LAST YOU", format!("{:.2} HOURS", time.hours()));
    if verbosity == Verbosity::Terse {
        return flight_time_line;
    }

    let mut lines = Vec::new();
    if verbosity >= Verbosity::Detailed {
        lines.push(section(palette, "MOTOR PARAMETERS"));
        lines.push(sentence(palette, "Number of motors:", load.motor_count));
        lines.push(sentence(palette, "Amperage per motor:", format!("{:.2}A", load.motor_amps)));
        lines.push(sentence(palette, "Load at hover:", format!("{:.1}%", load.hover_load_pct)));
        lines.push(section(palette, "BATTERY PARAMETERS"));
        lines.push(sentence(palette, "Capacity:", format!("{:.0}mAh ({:.2}Ah)", battery.capacity_mah, battery.capacity_ah())));
        lines.push(section(palette, "REPORT"));
    }
    lines.push(sentence(palette, "Current drawn at hover:", format!("{:.2}A", load.hover_current())));
    lines.push(sentence(palette, "Flight time:", format!("{:.2} hours ({:.1} minutes)", time.hours(), time.minutes())));
    if verbosity == Verbosity::Full {
        let full_throttle = MotorLoad::new(load.motor_count, load.motor_amps, 100.0);
        lines.push(sentence(palette, "Current drawn at full throttle:", format!("{:.2}A", full_throttle.hover_current())));
        if let Ok(time) = flight_time(battery, &full_throttle) {
            lines.push(sentence(palette, "Flight time at full throttle:",
                                format!("{:.2} hours ({:.1} minutes)", time.hours(), time.minutes())));
        }
    }
    lines.push(flight_time_line);
    lines.join("\n")
}

fn tether_warnings(plan: &TetherPlan, palette: &Palette) -> Vec<String> {
    let mut warnings = Vec::new();
    if plan.is_overloaded() {
        warnings.push(palette.issue(format!(
            "WARNING: gauge {} is rated for {}A but will carry {:.2}A.",
            plan.gauge().gauge(), plan.gauge().rated_current(), plan.requirements().average_current()
        )));
    }
    if plan.exceeds_voltage_limit() {
        if let Some(max_drop) = plan.requirements().max_voltage_drop {
            warnings.push(palette.issue(format!(
                "WARNING: the voltage drop of {:.2}V exceeds the {:.2}V limit.",
                plan.voltage_drop(), max_drop
            )));
        }
    }
    warnings
}

fn candidate_line(candidate: &CandidateAssessment, plan: &TetherPlan, palette: &Palette) -> String {
    let status = if candidate.entry.gauge() == plan.gauge().gauge() {
        palette.value("selected")
    } else if candidate.accepted {
        palette.label("suitable")
    } else {
        palette.issue("unsuitable")
    };
    format!("{:>5} | {:>6.1}A | {:>9.3e}m² | {:>8.3}V | {:>8.3}kg | {}",
            candidate.entry.gauge(),
            candidate.entry.rated_current(),
            candidate.entry.thickness(),
            candidate.voltage_drop,
            candidate.wire_weight,
            status)
}

pub fn render_tether(plan: &TetherPlan,
                     candidates: &[CandidateAssessment],
                     verbosity: Verbosity,
                     palette: &Palette) -> String {
    if verbosity == Verbosity::Quiet {
        return plan.gauge().gauge().to_string();
    }
    let gauge_line = sentence(palette, "The wire gauge requirement is", plan.gauge().gauge());
    let mut lines = Vec::new();
    if verbosity == Verbosity::Terse {
        lines.push(gauge_line);
        lines.extend(tether_warnings(plan, palette));
        return lines.join("\n");
    }

    let requirements = plan.requirements();
    if verbosity >= Verbosity::Detailed {
        lines.push(section(palette, "REQUIREMENTS"));
        lines.push(sentence(palette, "Operation mode:", requirements.op_mode()));
        lines.push(sentence(palette, "Maximum current:", format!("{:.2}A", requirements.peak_current)));
        lines.push(sentence(palette, "Load at hover:", format!("{:.1}%", requirements.hover_load_pct)));
        lines.push(sentence(palette, "Average current:", format!("{:.2}A", requirements.average_current())));
        lines.push(sentence(palette, "Wire length:", format!("{:.2}m", requirements.wire_length)));
        if let Some(max_drop) = requirements.max_voltage_drop {
            lines.push(sentence(palette, "Maximum voltage drop:", format!("{:.2}V", max_drop)));
        }
        if let Some(motor_voltage) = requirements.motor_voltage {
            lines.push(sentence(palette, "Motor voltage:", format!("{:.2}V", motor_voltage)));
        }
        if let Some(drone_weight) = requirements.drone_weight {
            lines.push(sentence(palette, "Drone weight:", format!("{:.2}kg", drone_weight)));
        }
    }
    if verbosity == Verbosity::Full && !candidates.is_empty() {
        lines.push(section(palette, "CANDIDATES"));
        lines.push(format!("{:>5} | {:>7} | {:>11} | {:>9} | {:>10} |", "gauge", "rated", "area", "drop", "weight"));
        lines.extend(candidates.iter().map(|c| candidate_line(c, plan, palette)));
    }

    lines.push(section(palette, "REPORT"));
    if plan.is_manually_selected() {
        lines.push(sentence(palette, "The requested wire gauge is", plan.gauge().gauge()));
    } else {
        lines.push(gauge_line);
    }
    lines.push(sentence(palette, "The voltage drop along the tether will be", format!("{:.2}V", plan.voltage_drop())));
    lines.push(sentence(palette, "The tether will weigh", format!("{:.2}kg", plan.wire_weight())));
    lines.push(sentence(palette, "The range of the drone is", format!("{:.2}m", plan.range())));
    if let Some(total_weight) = plan.total_weight() {
        lines.push(sentence(palette, "The total weight of the drone will be", format!("{:.2}kg", total_weight)));
    }
    if let Some(supply_voltage) = plan.supply_voltage() {
        lines.push(sentence(palette, "The voltage required will be", format!("{:.2}V", supply_voltage)));
    }
    lines.extend(tether_warnings(plan, palette));
    lines.join("\n")
}

pub fn render_catalog(catalog: &GaugeCatalog, verbosity: Verbosity, palette: &Palette) -> String {
    let sorted = catalog.sorted_by_thickness();
    if verbosity == Verbosity::Quiet {
        return sorted.iter().map(|e| e.gauge()).collect::<Vec<_>>().join("\n");
    }
    let mut lines = vec![format!("{:>5} | {:>7} | {:>11}", "gauge", "rated", "area")];
    lines.extend(sorted.iter().map(|entry| {
        format!("{:>5} | {:>6.1}A | {}",
                palette.value(entry.gauge()),
                entry.rated_current(),
                palette.value(format!("{:>9.3e}m²", entry.thickness())))
    }));
    lines.join("\n")
}
