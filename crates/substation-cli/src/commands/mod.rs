pub mod check;
pub mod config;
pub mod entities;
pub mod search;
pub mod serve;
pub mod show;

use substation_config::SubstationConfig;
use substation_core::{load_all, DataSources, LoadReport, RecordStore};

/// Load both configured sources into a fresh store
///
/// Failed sources leave their collection empty; callers decide how loudly
/// to report that.
pub(crate) fn load_store(config: &SubstationConfig) -> (RecordStore, LoadReport) {
    let store = RecordStore::new();
    let sources = DataSources::new(&config.data.equipment_path, &config.data.maintenance_path);
    let report = load_all(&store, &sources);
    (store, report)
}
