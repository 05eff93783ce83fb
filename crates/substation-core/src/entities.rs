//! Entity Extractor
//!
//! Derives the distinct values of five designated fields across both
//! collections. Values are trimmed, empties dropped, and the result sorted in
//! ordinal order, so extraction over an unchanged store is always identical.

use crate::record::{EquipmentRecord, MaintenanceRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Keys of the five entity sets, in output order
pub const ENTITY_KEYS: [&str; 5] = [
    "equipment_types",
    "locations",
    "maintenance_types",
    "manufacturers",
    "technicians",
];

/// Distinct entity values, one sorted list per key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub equipment_types: Vec<String>,
    pub locations: Vec<String>,
    pub maintenance_types: Vec<String>,
    pub manufacturers: Vec<String>,
    pub technicians: Vec<String>,
}

impl Entities {
    /// Values for one of the [`ENTITY_KEYS`]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        let values = match key {
            "equipment_types" => &self.equipment_types,
            "locations" => &self.locations,
            "maintenance_types" => &self.maintenance_types,
            "manufacturers" => &self.manufacturers,
            "technicians" => &self.technicians,
            _ => return None,
        };
        Some(values)
    }

    /// `(key, values)` pairs in [`ENTITY_KEYS`] order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        ENTITY_KEYS
            .into_iter()
            .filter_map(move |key| self.get(key).map(|values| (key, values)))
    }

    pub fn summary(&self) -> EntitySummary {
        EntitySummary {
            equipment_types: self.equipment_types.len(),
            locations: self.locations.len(),
            maintenance_types: self.maintenance_types.len(),
            manufacturers: self.manufacturers.len(),
            technicians: self.technicians.len(),
            total_unique_entities: self.iter().map(|(_, values)| values.len()).sum(),
        }
    }
}

/// Per-key counts of an [`Entities`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub equipment_types: usize,
    pub locations: usize,
    pub maintenance_types: usize,
    pub manufacturers: usize,
    pub technicians: usize,
    pub total_unique_entities: usize,
}

pub fn extract_entities(
    equipment: &[EquipmentRecord],
    maintenance: &[MaintenanceRecord],
) -> Entities {
    Entities {
        equipment_types: distinct(equipment.iter().map(|eq| &eq.equipment_type)),
        locations: distinct(equipment.iter().map(|eq| &eq.location)),
        maintenance_types: distinct(maintenance.iter().map(|log| &log.maintenance_type)),
        manufacturers: distinct(equipment.iter().map(|eq| &eq.manufacturer)),
        technicians: distinct(maintenance.iter().map(|log| &log.technician)),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a Option<String>>) -> Vec<String> {
    values
        .filter_map(|value| value.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
