// Shared output helpers for command implementations

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use substation_core::{EquipmentRecord, MaintenanceRecord};

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")?;
    println!("{json}");
    Ok(())
}

/// Field value for display; absent fields show as `-`
pub fn cell(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

pub fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

pub fn equipment_table<'a>(records: impl IntoIterator<Item = &'a EquipmentRecord>) -> Table {
    let mut table = new_table(&["ID", "Type", "Location", "Manufacturer", "Model", "Status"]);
    for eq in records {
        table.add_row(vec![
            cell(&eq.equipment_id),
            cell(&eq.equipment_type),
            cell(&eq.location),
            cell(&eq.manufacturer),
            cell(&eq.model),
            cell(&eq.status),
        ]);
    }
    table
}

pub fn maintenance_table<'a>(records: impl IntoIterator<Item = &'a MaintenanceRecord>) -> Table {
    let mut table = new_table(&["Log", "Equipment", "Type", "Technician", "Status", "Cost"]);
    for log in records {
        table.add_row(vec![
            cell(&log.log_id).to_string(),
            cell(&log.equipment_id).to_string(),
            cell(&log.maintenance_type).to_string(),
            cell(&log.technician).to_string(),
            cell(&log.status).to_string(),
            format!("{:.2}", log.cost_amount()),
        ]);
    }
    table
}
