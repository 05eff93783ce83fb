use anyhow::Result;
use serde_json::json;
use substation_config::SubstationConfig;

use super::load_store;
use crate::output::{equipment_table, maintenance_table, print_json};

pub fn execute(config: SubstationConfig, query: String, json: bool) -> Result<()> {
    let (store, _) = load_store(&config);
    let snapshot = store.snapshot();
    let results = snapshot.search(&query)?;

    if json {
        return print_json(&json!({
            "query": query,
            "total_results": results.total(),
            "results": results,
        }));
    }

    if !results.equipment.is_empty() {
        println!("Equipment ({})", results.equipment.len());
        println!("{}", equipment_table(results.equipment.iter().copied()));
    }
    if !results.maintenance.is_empty() {
        println!("Maintenance ({})", results.maintenance.len());
        println!("{}", maintenance_table(results.maintenance.iter().copied()));
    }
    println!("{} results for '{query}'", results.total());
    Ok(())
}
