//! Query Engine
//!
//! Pure functions over borrowed collections:
//!
//! - [`filter_equipment`] / [`filter_maintenance`] - equality filters
//! - [`search`] - case-insensitive substring search across both collections
//! - [`build_equipment_relationships`] - one equipment record joined to its
//!   maintenance history
//!
//! Results borrow from the input collections and keep their relative order.

mod filter;
mod relationships;
mod search;

pub use filter::{filter_equipment, filter_maintenance, EquipmentFilter, MaintenanceFilter};
pub use relationships::{build_equipment_relationships, EquipmentRelationship, RelationshipSummary};
pub use search::{search, SearchResults};
