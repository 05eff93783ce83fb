use anyhow::Result;
use serde_json::json;
use substation_config::SubstationConfig;

use super::load_store;
use crate::output::{new_table, print_json};

pub fn execute(config: SubstationConfig, json: bool) -> Result<()> {
    let (store, _) = load_store(&config);
    let entities = store.snapshot().entities();
    let summary = entities.summary();

    if json {
        return print_json(&json!({
            "entities": entities,
            "summary": summary,
        }));
    }

    let mut table = new_table(&["Entity", "Count", "Values"]);
    for (key, values) in entities.iter() {
        table.add_row(vec![
            key.to_string(),
            values.len().to_string(),
            values.join(", "),
        ]);
    }
    println!("{table}");
    println!("Total unique entities: {}", summary.total_unique_entities);
    Ok(())
}
