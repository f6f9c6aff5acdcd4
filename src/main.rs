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

mod cli;
mod data;
mod report;
mod settings;

use std::fs;
use std::io;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use clap::{CommandFactory, Parser};
use tracing::{debug, error, info, warn};

use battery::flight_time;
use tether::{assess_candidates, plan_tether, plan_with_gauge, GaugeCatalog};

use crate::cli::{resolve_battery, resolve_tether, BatteryArgs, Cli, CliError, Commands, Prompter, TetherArgs};
use crate::report::{render_battery, render_catalog, render_tether, Palette, Verbosity};
use crate::settings::GlobalSettings;

const DEFAULT_LISTING_VERBOSITY: u8 = 2;

fn init_logging(settings: &GlobalSettings) {
    let log_dir = data::get_local_app_data_path();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to init logging. Couldn't create {}. {}", log_dir.display(), e.to_string());
        return;
    }
    let file_appender = tracing_appender::rolling::never(&log_dir, data::LOG_FILENAME);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_max_level(settings.log_level())
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            info!("Logging initialised");
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e.to_string());
        }
    }
}

fn verbosity_for(cli: &Cli, settings: &GlobalSettings) -> Verbosity {
    let default = match cli.command {
        Commands::Battery(_) => settings.battery_verbosity(),
        Commands::Tether(_) => settings.tether_verbosity(),
        Commands::Gauges { .. } | Commands::Settings { .. } => DEFAULT_LISTING_VERBOSITY
    };
    Verbosity::from(cli.verbosity.unwrap_or(default))
}

fn load_catalog(cli: &Cli, settings: &GlobalSettings) -> Result<GaugeCatalog, CliError> {
    match cli.catalog.clone().or_else(|| settings.catalog_path()) {
        Some(path) => Ok(GaugeCatalog::from_path(&path)?),
        None => {
            debug!("Using the AWG reference catalog");
            Ok(GaugeCatalog::awg_reference())
        }
    }
}

fn stdio_prompter(palette: Palette) -> Prompter<'static> {
    Prompter::new(io::stdin().lock(), io::stdout(), palette)
}

fn run_battery(args: &BatteryArgs, verbosity: Verbosity, palette: Palette) -> Result<(), CliError> {
    let (battery, load) = match args.interactive {
        true => resolve_battery(args, Some(&mut stdio_prompter(palette)))?,
        false => resolve_battery(args, None)?
    };
    info!("Estimating flight time for {:?} with {:?}", battery, load);
    let time = flight_time(&battery, &load)?;
    println!("{}", render_battery(&battery, &load, &time, verbosity, &palette));
    Ok(())
}

fn run_tether(args: &TetherArgs, catalog: &GaugeCatalog, verbosity: Verbosity, palette: Palette) -> Result<(), CliError> {
    let inputs = match args.interactive {
        true => resolve_tether(args, Some(&mut stdio_prompter(palette)))?,
        false => resolve_tether(args, None)?
    };
    info!("Planning tether for {:?}", inputs.requirements);
    let plan = match &inputs.gauge {
        Some(gauge) => plan_with_gauge(catalog, &inputs.requirements, gauge)?,
        None => plan_tether(catalog, &inputs.requirements)?
    };
    let candidates = assess_candidates(catalog, &inputs.requirements);
    println!("{}", render_tether(&plan, &candidates, verbosity, &palette));
    Ok(())
}

fn run_gauges(catalog: &GaugeCatalog, as_toml: bool, verbosity: Verbosity, palette: Palette) -> Result<(), CliError> {
    match as_toml {
        true => print!("{}", catalog.to_toml_string()?),
        false => println!("{}", render_catalog(catalog, verbosity, &palette))
    }
    Ok(())
}

/// Output palettes for stdout and stderr, coloured independently depending on
/// which of the two is a terminal.
#[derive(Debug, Clone, Copy)]
struct Palettes {
    out: Palette,
    err: Palette
}

impl Palettes {
    fn detect(colour_enabled: bool) -> Palettes {
        Palettes {
            out: Palette::new(colour_enabled && io::stdout().is_terminal()),
            err: Palette::new(colour_enabled && io::stderr().is_terminal())
        }
    }
}

fn run_settings(settings: &GlobalSettings, path: &Path, write_defaults: bool, palettes: Palettes) -> Result<(), CliError> {
    let palette = palettes.out;
    if write_defaults {
        if path.exists() {
            warn!("Not overwriting existing settings at {}", path.display());
            eprintln!("{}", palettes.err.issue(format!("Settings file {} already exists.", path.display())));
        } else {
            GlobalSettings::default().write_to(path)?;
            println!("{} {}", palette.label("Wrote default settings to"), palette.value(path.display()));
        }
    }
    println!("# {}", path.display());
    print!("{}", settings.to_toml_string()?);
    Ok(())
}

fn run(cli: &Cli, settings: &GlobalSettings, verbosity: Verbosity, palettes: Palettes) -> Result<(), CliError> {
    let palette = palettes.out;
    match &cli.command {
        Commands::Battery(args) => run_battery(args, verbosity, palette),
        Commands::Tether(args) => run_tether(args, &load_catalog(cli, settings)?, verbosity, palette),
        Commands::Gauges { toml: as_toml } => run_gauges(&load_catalog(cli, settings)?, *as_toml, verbosity, palette),
        Commands::Settings { write_defaults } => {
            run_settings(settings, &GlobalSettings::config_file_path(), *write_defaults, palettes)
        }
    }
}

fn report_error(cli: &Cli, err: CliError, verbosity: Verbosity, palette: Palette) {
    match err {
        CliError::InvalidArguments(issues) => {
            warn!("Invalid arguments for {}. {:?}", cli.command.name(), issues);
            if verbosity == Verbosity::Quiet {
                return;
            }
            let mut command = Cli::command();
            command.build();
            if let Some(subcommand) = command.find_subcommand_mut(cli.command.name()) {
                if let Err(e) = subcommand.print_help() {
                    error!("Failed to print help. {}", e.to_string());
                }
            }
            eprintln!();
            for issue in issues {
                eprintln!("{}", palette.issue(issue));
            }
        }
        other => {
            error!("{} failed. {}", cli.command.name(), other);
            if verbosity > Verbosity::Quiet {
                eprintln!("{}", palette.issue(other));
            }
        }
    }
}

fn exit_status(cli: &Cli, result: Result<(), CliError>, verbosity: Verbosity, palette: Palette) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(cli, e, verbosity, palette);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (settings, settings_error) = match GlobalSettings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (GlobalSettings::default(), Some(e))
    };
    init_logging(&settings);
    if let Some(e) = settings_error {
        warn!("Failed to load settings. Using defaults. {}", e.to_string());
    }

    let verbosity = verbosity_for(&cli, &settings);
    let palettes = Palettes::detect(settings.colour() && !cli.no_colour);
    let result = run(&cli, &settings, verbosity, palettes);
    exit_status(&cli, result, verbosity, palettes.err)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::process::ExitCode;
    use clap::Parser;
    use tether::{GaugeCatalog, GaugeEntry};

    use crate::cli::Cli;
    use crate::report::{Palette, Verbosity};
    use crate::settings::GlobalSettings;
    use crate::{exit_status, load_catalog, run, run_settings, Palettes};

    fn plain() -> Palettes {
        Palettes { out: Palette::plain(), err: Palette::plain() }
    }

    fn write_catalog(path: &Path, entries: Vec<GaugeEntry>) -> GaugeCatalog {
        let catalog = GaugeCatalog::new(entries).unwrap();
        fs::write(path, catalog.to_toml_string().unwrap()).unwrap();
        catalog
    }

    fn settings_with_catalog(dir: &Path, catalog_path: &Path) -> GlobalSettings {
        let settings_path = dir.join("settings.toml");
        fs::write(&settings_path, format!("catalog_path = \"{}\"\n", catalog_path.display())).unwrap();
        let settings = GlobalSettings::load_from(&settings_path).unwrap();
        assert_eq!(settings.catalog_path(), Some(catalog_path.to_path_buf()));
        settings
    }

    #[test]
    fn catalog_flag_beats_settings_path() {
        let dir = tempfile::tempdir().unwrap();
        let flag_path = dir.path().join("flag.toml");
        let settings_path = dir.path().join("configured.toml");
        let from_flag = write_catalog(&flag_path, vec![GaugeEntry::new("A", 10.0, 1e-6)]);
        let from_settings = write_catalog(&settings_path, vec![GaugeEntry::new("B", 20.0, 2e-6)]);
        let settings = settings_with_catalog(dir.path(), &settings_path);

        let flag = flag_path.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["drone-calc", "--catalog", flag.as_str(), "gauges"]).unwrap();
        assert_eq!(load_catalog(&cli, &settings).unwrap(), from_flag);

        let cli = Cli::try_parse_from(["drone-calc", "gauges"]).unwrap();
        assert_eq!(load_catalog(&cli, &settings).unwrap(), from_settings);
    }

    #[test]
    fn reference_catalog_when_nothing_configured() {
        let cli = Cli::try_parse_from(["drone-calc", "gauges"]).unwrap();
        let catalog = load_catalog(&cli, &GlobalSettings::default()).unwrap();
        assert_eq!(catalog, GaugeCatalog::awg_reference());
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml").to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["drone-calc", "--catalog", missing.as_str(), "gauges"]).unwrap();
        assert!(load_catalog(&cli, &GlobalSettings::default()).is_err());
    }

    #[test]
    fn write_defaults_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drone-calc-conf.toml");
        let existing = "colour = false\ntether_verbosity = 2\n";
        fs::write(&path, existing).unwrap();

        run_settings(&GlobalSettings::default(), &path, true, plain()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), existing);
    }

    #[test]
    fn write_defaults_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("drone-calc-conf.toml");

        run_settings(&GlobalSettings::default(), &path, true, plain()).unwrap();
        assert_eq!(GlobalSettings::load_from(&path).unwrap(), GlobalSettings::default());
    }

    #[test]
    fn disabled_colour_is_plain_on_both_streams() {
        let palettes = Palettes::detect(false);
        assert_eq!(palettes.out, Palette::plain());
        assert_eq!(palettes.err, Palette::plain());
        assert_eq!(palettes.err.issue("MISSING"), "MISSING");
    }

    #[test]
    fn missing_tether_arguments_fail() {
        let cli = Cli::try_parse_from(["drone-calc", "-v", "0", "tether"]).unwrap();
        let settings = GlobalSettings::default();
        let result = run(&cli, &settings, Verbosity::Quiet, plain());
        assert!(result.is_err());
        assert_eq!(exit_status(&cli, result, Verbosity::Quiet, Palette::plain()), ExitCode::FAILURE);
    }

    #[test]
    fn successful_run_exits_cleanly() {
        let cli = Cli::try_parse_from(["drone-calc", "-v", "0", "gauges"]).unwrap();
        let result = run(&cli, &GlobalSettings::default(), Verbosity::Quiet, plain());
        assert_eq!(exit_status(&cli, result, Verbosity::Quiet, Palette::plain()), ExitCode::SUCCESS);
    }
}
