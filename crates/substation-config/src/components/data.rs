use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the two record sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub equipment_path: PathBuf,
    pub maintenance_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            equipment_path: PathBuf::from("data/equipment_inventory.csv"),
            maintenance_path: PathBuf::from("data/maintenance_logs.json"),
        }
    }
}
