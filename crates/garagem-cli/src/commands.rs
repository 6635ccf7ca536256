//! Command handlers

use garagem_app::config::Config;
use garagem_app::garage::{Garage, MaintenanceInput, VehicleInput};
use garagem_app::repository::open_garage;
use garagem_domain::{format_plate_for_display, normalize_plate, today_utc};
use garagem_store::FileStore;
use garagem_types::{Error, OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{Cli, Commands, MaintenanceAction, VehicleAction};
use crate::notifier::TerminalNotifier;
use crate::output::{output_maintenance, output_maintenances, output_vehicle, output_vehicles};

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(ref dir) = cli.store_dir {
        config.store_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Vehicle { action } => {
            let garage = open(&config)?;
            cmd_vehicle(&garage, action, output_format)
        }

        Commands::Maintenance { action } => {
            let garage = open(&config)?;
            cmd_maintenance(&garage, action, output_format)
        }

        Commands::Config {
            show,
            set_store_dir,
            set_output,
            reset,
        } => cmd_config(show, set_store_dir, set_output, reset),
    }
}

fn open(config: &Config) -> Result<Garage<FileStore>> {
    let store_dir = config.store_dir()?;
    debug!(store_dir = %store_dir.display(), "opening garage");
    open_garage(config, TerminalNotifier)
}

fn cmd_vehicle(
    garage: &Garage<FileStore>,
    action: VehicleAction,
    output_format: OutputFormat,
) -> Result<()> {
    match action {
        VehicleAction::Add {
            plate,
            model,
            year,
            color,
            notes,
        } => {
            let vehicle = garage.register_vehicle(VehicleInput {
                plate,
                model,
                year,
                color,
                notes,
            })?;
            output_vehicle(output_format, &vehicle)
        }

        VehicleAction::List => output_vehicles(output_format, &garage.vehicles()),

        VehicleAction::Remove { plate } => {
            let display = format_plate_for_display(&normalize_plate(&plate));
            if !garage.remove_vehicle(&plate)? {
                return Err(Error::Rejected(format!(
                    "Nenhum veículo cadastrado com a placa {}.",
                    display
                )));
            }
            println!("Veículo {} removido.", display);
            Ok(())
        }
    }
}

fn cmd_maintenance(
    garage: &Garage<FileStore>,
    action: MaintenanceAction,
    output_format: OutputFormat,
) -> Result<()> {
    match action {
        MaintenanceAction::Add {
            plate,
            date,
            service,
            cost,
            notes,
            schedule,
        } => {
            let record = garage.register_maintenance(MaintenanceInput {
                plate,
                date,
                service,
                cost,
                notes,
                scheduled: schedule,
            })?;
            output_maintenance(output_format, &record)
        }

        MaintenanceAction::List { plate, upcoming } => {
            let mut records = if upcoming {
                garage.upcoming_maintenances(today_utc())
            } else {
                garage.maintenances()
            };
            if let Some(ref plate) = plate {
                let plate = normalize_plate(plate);
                records.retain(|m| m.vehicle_plate == plate);
            }
            output_maintenances(output_format, &records)
        }
    }
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved to {}", Config::config_path()?.display());
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
