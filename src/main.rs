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

mod error;
mod report;
mod settings;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use tune_engine::{calculate_tune, get_differential_recommendation, validate_differential_settings,
                  CarSpecs, CarSpecsInput, DiffStyle, DifferentialRecommendation, DriveType,
                  DifferentialValidation, TuneType, Variant};
use utils::units::UnitSystem;
use crate::error::AppError;
use crate::report::{render_differential, render_tune, TuneReport};
use crate::settings::{GlobalSettings, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "tune-crane", version)]
#[command(about = "Calculate a suspension, drivetrain, brake and gearing tune from a car's specification")]
struct Args {
    /// Car description file (toml)
    #[arg(long)]
    car: PathBuf,

    /// Tuning discipline: grip, street, race, drift, drag, rally or offroad
    #[arg(long)]
    tune: Option<TuneType>,

    /// Where inside the discipline's ranges to land: soft, standard or stiff
    #[arg(long)]
    variant: Option<Variant>,

    /// Handling balance override from -100 (softer front) to 100 (stiffer front)
    #[arg(long, allow_negative_numbers = true)]
    balance: Option<f64>,

    /// Overall stiffness override from 0 to 100; 50 leaves the tune alone
    #[arg(long)]
    stiffness: Option<f64>,

    /// Units for the text output: imperial or metric
    #[arg(long)]
    units: Option<UnitSystem>,

    /// Output format
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Only show the differential recommendation
    #[arg(long)]
    diff_only: bool
}

impl Args {
    fn apply_to(&self, settings: &mut GlobalSettings) {
        if let Some(tune_type) = self.tune {
            settings.set_tune_type(tune_type);
        }
        if let Some(variant) = self.variant {
            settings.set_variant(variant);
        }
        if let Some(balance) = self.balance {
            settings.set_balance(balance);
        }
        if let Some(stiffness) = self.stiffness {
            settings.set_stiffness(stiffness);
        }
        if let Some(units) = self.units {
            settings.set_unit_system(units);
        }
        if let Some(output) = self.output {
            settings.set_output(output);
        }
    }
}

/// Differential output for json and toml. Both halves are empty when no baseline
/// exists for the drivetrain and discipline.
#[derive(Debug, Serialize)]
struct DifferentialReport<'a> {
    drive_type: DriveType,
    tune_type: TuneType,
    recommendation: Option<&'a DifferentialRecommendation>,
    validation: Option<&'a DifferentialValidation>
}

fn init_logging() {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "tune_crane.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
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
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn load_car(path: &PathBuf) -> Result<CarSpecs, AppError> {
    let data = fs::read_to_string(path).map_err(|e| {
        AppError::CarFileError(path.display().to_string(), e.to_string())
    })?;
    let input: CarSpecsInput = toml::from_str(&data)?;
    let specs = CarSpecs::try_from(input)?;
    info!("Loaded {} from {}", specs, path.display());
    Ok(specs)
}

fn differential_only(specs: &CarSpecs, tune_type: TuneType, output: OutputFormat) -> Result<String, AppError> {
    let style = DiffStyle::from_driving_style(specs.driving_style());
    let recommendation = get_differential_recommendation(specs.drive_type(), tune_type, style);
    let validation = recommendation.as_ref()
        .map(|recommendation| validate_differential_settings(&recommendation.settings, specs.drive_type()));
    if recommendation.is_none() {
        info!("No {} differential baseline for {}", tune_type, specs.drive_type());
    }
    let report = DifferentialReport {
        drive_type: specs.drive_type(),
        tune_type,
        recommendation: recommendation.as_ref(),
        validation: validation.as_ref()
    };
    Ok(match (output, &recommendation, &validation) {
        (OutputFormat::Text, Some(recommendation), Some(validation)) => render_differential(recommendation, validation),
        (OutputFormat::Text, _, _) => format!("No {} differential baseline exists for a {} car", tune_type, specs.drive_type()),
        (OutputFormat::Json, _, _) => serde_json::to_string_pretty(&report)?,
        (OutputFormat::Toml, _, _) => toml::to_string(&report)?
    })
}

fn run(args: &Args) -> Result<String, AppError> {
    let mut settings = GlobalSettings::load()?;
    args.apply_to(&mut settings);
    settings.validate()?;

    let specs = load_car(&args.car)?;
    if args.diff_only {
        return differential_only(&specs, settings.tune_type(), settings.output());
    }

    let tune = calculate_tune(&specs, settings.tune_type(), settings.variant())
        .with_balance_stiffness(settings.balance(), settings.stiffness());
    info!("Calculated {} tune with balance {} and stiffness {}",
          settings.tune_type(), settings.balance(), settings.stiffness());
    let report = TuneReport { car: &specs, tune: &tune };
    Ok(match settings.output() {
        OutputFormat::Text => render_tune(&specs, &tune, settings.unit_system()),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Toml => toml::to_string(&report)?
    })
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
