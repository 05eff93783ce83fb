//! # Substation Core
//!
//! In-memory data access and query layer for utility equipment and
//! maintenance records.
//!
//! - [`RecordStore`] holds the two collections and hands out [`Snapshot`]s
//! - [`loader`] decodes CSV and JSON sources into the store
//! - [`query`] filters, searches and joins records
//! - [`entities`] extracts distinct normalized field values
//! - [`integrity`] reports orphaned maintenance references
//!
//! ## Example
//!
//! ```rust,no_run
//! use substation_core::{load_all, DataSources, EquipmentFilter, RecordStore};
//!
//! let store = RecordStore::new();
//! let report = load_all(
//!     &store,
//!     &DataSources::new("data/equipment_inventory.csv", "data/maintenance_logs.json"),
//! );
//! if !report.all_loaded() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//!
//! let snapshot = store.snapshot();
//! let filter = EquipmentFilter::default().with_type("Transformer");
//! let transformers = snapshot.filter_equipment(&filter);
//! println!("{} transformers", transformers.len());
//! ```

pub mod entities;
pub mod error;
pub mod integrity;
pub mod loader;
pub mod query;
pub mod record;
pub mod store;

pub use entities::{extract_entities, Entities, EntitySummary, ENTITY_KEYS};
pub use error::{LoadError, QueryError, QueryResult};
pub use integrity::{validate, IntegrityIssue};
pub use loader::{
    load_all, load_equipment, load_maintenance, read_records, DataSource, DataSources,
    LoadReport, SourceFormat,
};
pub use query::{
    build_equipment_relationships, filter_equipment, filter_maintenance, search,
    EquipmentFilter, EquipmentRelationship, MaintenanceFilter, RelationshipSummary,
    SearchResults,
};
pub use record::{EquipmentRecord, Extras, MaintenanceRecord, Record};
pub use store::{HealthStatus, RecordStore, Snapshot, StoreSummary};
