use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use substation_config::SubstationConfig;

use super::load_store;
use crate::output::{cell, maintenance_table, print_json};

pub fn execute(config: SubstationConfig, equipment_id: String, json: bool) -> Result<ExitCode> {
    let (store, _) = load_store(&config);
    let snapshot = store.snapshot();

    let Some(relationship) = snapshot.relationships(&equipment_id) else {
        eprintln!("{} Equipment {equipment_id} not found", "Error:".red().bold());
        return Ok(ExitCode::FAILURE);
    };

    if json {
        print_json(&relationship)?;
        return Ok(ExitCode::SUCCESS);
    }

    let eq = relationship.equipment;
    println!("{}", cell(&eq.equipment_id).bold());
    println!("  Type:         {}", cell(&eq.equipment_type));
    println!("  Location:     {}", cell(&eq.location));
    println!("  Manufacturer: {}", cell(&eq.manufacturer));
    println!("  Model:        {}", cell(&eq.model));
    println!("  Status:       {}", cell(&eq.status));

    let summary = &relationship.summary;
    println!();
    println!("Maintenance records: {}", summary.maintenance_count);
    println!("Total cost:          {:.2}", summary.total_cost);
    println!("Technicians:         {}", summary.technicians_involved.join(", "));
    println!("Maintenance types:   {}", summary.maintenance_types.join(", "));

    if !relationship.maintenance_history.is_empty() {
        println!();
        println!(
            "{}",
            maintenance_table(relationship.maintenance_history.iter().copied())
        );
    }

    Ok(ExitCode::SUCCESS)
}
