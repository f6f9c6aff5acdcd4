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

pub mod prompt;

use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use clap::{Args, Parser, Subcommand};

use battery::{Battery, BatteryError, MotorLoad};
use tether::{CatalogError, OpMode, PlanError, TetherRequirements};

pub use prompt::Prompter;

#[derive(Parser, Debug)]
#[command(name = "drone-calc", author, version, about = "Electrical design calculators for small drones", long_about = None)]
pub struct Cli {
    /// How "talkative" the program should be (0-4)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub verbosity: Option<u8>,

    /// Disable coloured output
    #[arg(long, global = true, default_value_t = false)]
    pub no_colour: bool,

    /// Load the wire gauge catalog from a TOML file instead of using the AWG reference table
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate how long a battery keeps the drone hovering
    Battery(BatteryArgs),
    /// Calculate the required wire gauge for a tethered drone
    Tether(TetherArgs),
    /// List the wire gauges in the active catalog, thinnest first
    Gauges {
        /// Print the catalog as TOML, suitable for use with --catalog
        #[arg(long, default_value_t = false)]
        toml: bool
    },
    /// Show the active settings
    Settings {
        /// Write the default settings file
        #[arg(long, default_value_t = false)]
        write_defaults: bool
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Battery(_) => "battery",
            Commands::Tether(_) => "tether",
            Commands::Gauges { .. } => "gauges",
            Commands::Settings { .. } => "settings"
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct BatteryArgs {
    /// Number of motors on the drone
    #[arg(short = 'n', long, visible_alias = "num-motors", help_heading = "Motor Parameters")]
    pub motor_count: Option<u32>,

    /// Amps per motor
    #[arg(short = 'A', long, help_heading = "Motor Parameters")]
    pub motor_amps: Option<f64>,

    /// The load on the motor at hover (%age of total amps)
    #[arg(short = 'l', long, help_heading = "Motor Parameters")]
    pub hover_load: Option<f64>,

    /// Battery capacity in milliAmpereHours
    #[arg(short = 'c', long, help_heading = "Battery Parameters")]
    pub capacity: Option<f64>,

    /// Prompt for any parameter not given on the command line
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TetherArgs {
    /// Should we prioritise wire weight or voltage drop ("weight" or "voltage")
    #[arg(short = 'o', long, default_value = "weight", help_heading = "OPERATION MODE")]
    pub op_mode: String,

    /// The maximum load (A) that the system will carry
    #[arg(short = 'I', long, help_heading = "ELECTRICAL PROPERTIES")]
    pub current: Option<f64>,

    /// The hover load (as a percentage of maximum load)
    #[arg(short = 'l', long, help_heading = "ELECTRICAL PROPERTIES")]
    pub load: Option<f64>,

    /// The maximum allowable voltage drop (V)
    #[arg(short = 'V', long, help_heading = "ELECTRICAL PROPERTIES")]
    pub voltage: Option<f64>,

    /// The operating voltage (V) of the motors
    #[arg(long, help_heading = "ELECTRICAL PROPERTIES")]
    pub motor_voltage: Option<f64>,

    /// The distance (in meters) the wire must cover
    #[arg(short = 'd', long, help_heading = "DIMENSIONS")]
    pub distance: Option<f64>,

    /// The gauge of the wire (AWG) to evaluate instead of selecting one
    #[arg(short = 'g', long, help_heading = "DIMENSIONS")]
    pub gauge: Option<String>,

    /// The weight (kg) of the drone without the tether
    #[arg(long, help_heading = "DIMENSIONS")]
    pub drone_weight: Option<f64>,

    /// Prompt for any parameter not given on the command line
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,
}

impl Default for TetherArgs {
    fn default() -> Self {
        TetherArgs {
            op_mode: OpMode::WEIGHT_STRING.to_string(),
            current: None,
            load: None,
            voltage: None,
            motor_voltage: None,
            distance: None,
            gauge: None,
            drone_weight: None,
            interactive: false
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("invalid arguments. {}", .0.join(" "))]
    InvalidArguments(Vec<String>),
    #[error("io error. {0}")]
    IoError(#[from] io::Error),
    #[error("catalog error. {0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Plan(#[from] PlanError),
    #[error("{0}")]
    Battery(#[from] BatteryError),
    #[error("failed to encode settings. {0}")]
    Settings(#[from] toml::ser::Error),
}

/// Collects required values from the command line, falling back to prompting
/// when a [Prompter] is available. Values that can't be found are recorded as issues.
struct FieldResolver<'p, 'a> {
    prompter: Option<&'p mut Prompter<'a>>,
    issues: Vec<String>
}

impl<'p, 'a> FieldResolver<'p, 'a> {
    fn new(prompter: Option<&'p mut Prompter<'a>>) -> FieldResolver<'p, 'a> {
        FieldResolver { prompter, issues: Vec::new() }
    }

    fn section(&mut self, title: &str) -> Result<(), CliError> {
        if let Some(prompter) = self.prompter.as_mut() {
            prompter.section(title)?;
        }
        Ok(())
    }

    fn require<T: FromStr + Clone>(&mut self, value: &Option<T>, question: &str, issue: &str) -> Result<Option<T>, CliError> {
        if value.is_some() {
            return Ok(value.clone());
        }
        match self.prompter.as_mut() {
            Some(prompter) => Ok(Some(prompter.ask(question)?)),
            None => {
                self.issues.push(issue.to_string());
                Ok(None)
            }
        }
    }

    fn optional<T: FromStr + Clone>(&mut self, value: &Option<T>, question: &str) -> Result<Option<T>, CliError> {
        if value.is_some() {
            return Ok(value.clone());
        }
        match self.prompter.as_mut() {
            Some(prompter) => Ok(prompter.ask_optional(question)?),
            None => Ok(None)
        }
    }

    fn finish(self) -> Result<(), CliError> {
        match self.issues.is_empty() {
            true => Ok(()),
            false => Err(CliError::InvalidArguments(self.issues))
        }
    }
}

pub fn resolve_battery(args: &BatteryArgs, prompter: Option<&mut Prompter>) -> Result<(Battery, MotorLoad), CliError> {
    let mut resolver = FieldResolver::new(prompter);
    resolver.section("MOTOR PARAMETERS")?;
    let motor_count = resolver.require(
        &args.motor_count,
        "Please specify the number of motors: ",
        "MOTOR COUNT CANNOT BE BLANK (-n or --motor-count)."
    )?;
    let motor_amps = resolver.require(
        &args.motor_amps,
        "Please specify the amperage of each motor (A): ",
        "MOTOR AMPERAGE CANNOT BE BLANK (-A or --motor-amps)."
    )?;
    let hover_load = resolver.require(
        &args.hover_load,
        "Please specify the %age load at which the motor hovers: ",
        "MOTOR LOAD CANNOT BE BLANK (-l or --hover-load)."
    )?;
    resolver.section("BATTERY PARAMETERS")?;
    let capacity = resolver.require(
        &args.capacity,
        "Please enter the capacity of your battery (mAh): ",
        "BATTERY CAPACITY CANNOT BE BLANK (-c or --capacity)."
    )?;
    resolver.finish()?;

    Ok((
        Battery::new(capacity.unwrap_or_default()),
        MotorLoad::new(motor_count.unwrap_or_default(), motor_amps.unwrap_or_default(), hover_load.unwrap_or_default())
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TetherInputs {
    pub requirements: TetherRequirements,
    /// A specific gauge to evaluate rather than select
    pub gauge: Option<String>
}

pub fn resolve_tether(args: &TetherArgs, prompter: Option<&mut Prompter>) -> Result<TetherInputs, CliError> {
    let op_mode = args.op_mode.parse::<OpMode>().map_err(|_| {
        CliError::InvalidArguments(vec![
            "INVALID OPERATION MODE: '--op-mode' or '-o' can only have the values: 'weight' or 'voltage'".to_string()
        ])
    })?;

    let mut resolver = FieldResolver::new(prompter);
    resolver.section("OPERATIONAL PARAMETERS")?;
    let current = resolver.require(
        &args.current,
        "Please specify the maximum current of the system (A): ",
        "MISSING ARGUMENT: '--current' or '-I' -- You must specify the maximum current of the system."
    )?;
    let load = resolver.require(
        &args.load,
        "Please specify the %age load at which the system hovers: ",
        "MISSING ARGUMENT: '--load' or '-l' -- You must specify how much load the system has on hover (%age of max load)."
    )?;
    let max_voltage_drop = match op_mode {
        OpMode::Weight => None,
        OpMode::Voltage => resolver.require(
            &args.voltage,
            "Please specify the maximum allowable voltage drop (V): ",
            "MISSING ARGUMENT: '--voltage' or '-V' -- You must specify the maximum allowable voltage drop."
        )?
    };
    let motor_voltage = resolver.optional(
        &args.motor_voltage,
        "Please specify the operating voltage of the motors (V, blank to skip): "
    )?;
    resolver.section("DIMENSIONAL PARAMETERS")?;
    let distance = resolver.require(
        &args.distance,
        "Please specify the length of the wire (m): ",
        "MISSING ARGUMENT: '--distance' or '-d' -- You must specify how long the wire is."
    )?;
    let drone_weight = resolver.optional(
        &args.drone_weight,
        "Please specify the weight of the drone (kg, blank to skip): "
    )?;
    resolver.finish()?;

    let mut requirements = TetherRequirements::new(
        current.unwrap_or_default(),
        load.unwrap_or_default(),
        distance.unwrap_or_default()
    );
    requirements.max_voltage_drop = max_voltage_drop;
    requirements.motor_voltage = motor_voltage;
    requirements.drone_weight = drone_weight;
    Ok(TetherInputs { requirements, gauge: args.gauge.clone() })
}
