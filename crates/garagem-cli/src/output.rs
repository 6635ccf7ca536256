//! Output formatting module

use garagem_domain::{format_currency_brl, Maintenance, Vehicle};
use garagem_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

pub fn output_vehicle(output_format: OutputFormat, vehicle: &Vehicle) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(vehicle);
    }

    println!("Veículo {} cadastrado com sucesso!", vehicle.display_plate());
    println!("Modelo:  {}", vehicle.model);
    println!("Ano:     {}", vehicle.year);
    if let Some(ref color) = vehicle.color {
        println!("Cor:     {}", color);
    }
    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(vehicles);
    }

    if vehicles.is_empty() {
        println!("Nenhum veículo cadastrado.");
        return Ok(());
    }

    println!("{:<10} {:<24} {:>5} {:<12}", "Placa", "Modelo", "Ano", "Cor");
    println!("{}", "-".repeat(54));
    for v in vehicles {
        println!(
            "{:<10} {:<24} {:>5} {:<12}",
            v.display_plate(),
            truncate(&v.model, 24),
            v.year,
            v.color.as_deref().unwrap_or("-"),
        );
    }
    println!("\n{} veículo(s)", vehicles.len());
    Ok(())
}

pub fn output_maintenance(output_format: OutputFormat, record: &Maintenance) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(record);
    }

    println!(
        "Manutenção de {} registrada para {}.",
        record.display_plate(),
        record.display_date()
    );
    println!("Serviço: {}", record.service);
    if record.cost.is_some() {
        println!("Custo:   {}", record.display_cost());
    }
    Ok(())
}

pub fn output_maintenances(output_format: OutputFormat, records: &[Maintenance]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(records);
    }

    if records.is_empty() {
        println!("Nenhuma manutenção encontrada.");
        return Ok(());
    }

    println!("{:<10} {:<12} {:<28} {:>14}", "Placa", "Data", "Serviço", "Custo");
    println!("{}", "-".repeat(67));
    for m in records {
        println!(
            "{:<10} {:<12} {:<28} {:>14}",
            m.display_plate(),
            m.display_date(),
            truncate(&m.service, 28),
            m.display_cost(),
        );
    }

    let total: f64 = records.iter().filter_map(|m| m.cost).sum();
    println!("\n{} registro(s), total {}", records.len(), format_currency_brl(total));
    Ok(())
}
