use crate::record::{EquipmentRecord, MaintenanceRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// One equipment record joined to its maintenance history
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentRelationship<'a> {
    pub equipment: &'a EquipmentRecord,
    pub maintenance_history: Vec<&'a MaintenanceRecord>,
    pub summary: RelationshipSummary,
}

/// Aggregates derived from a maintenance history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipSummary {
    pub maintenance_count: usize,
    pub total_cost: f64,
    /// Distinct non-empty technician names, sorted
    pub technicians_involved: Vec<String>,
    /// Distinct non-empty maintenance types, sorted
    pub maintenance_types: Vec<String>,
}

impl RelationshipSummary {
    fn from_history(history: &[&MaintenanceRecord]) -> Self {
        let technicians: BTreeSet<&str> = history
            .iter()
            .filter_map(|log| log.technician.as_deref())
            .filter(|name| !name.is_empty())
            .collect();
        let maintenance_types: BTreeSet<&str> = history
            .iter()
            .filter_map(|log| log.maintenance_type.as_deref())
            .filter(|kind| !kind.is_empty())
            .collect();

        Self {
            maintenance_count: history.len(),
            total_cost: history.iter().map(|log| log.cost_amount()).sum(),
            technicians_involved: technicians.into_iter().map(str::to_string).collect(),
            maintenance_types: maintenance_types.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Join the first equipment record whose `equipment_id` equals `equipment_id`
/// (exact match) with every maintenance record referencing it.
///
/// Returns `None` when no equipment record carries that id.
pub fn build_equipment_relationships<'a>(
    equipment_id: &str,
    equipment: &'a [EquipmentRecord],
    maintenance: &'a [MaintenanceRecord],
) -> Option<EquipmentRelationship<'a>> {
    let record = equipment
        .iter()
        .find(|eq| eq.equipment_id.as_deref() == Some(equipment_id))?;

    let maintenance_history: Vec<_> = maintenance
        .iter()
        .filter(|log| log.equipment_id.as_deref() == Some(equipment_id))
        .collect();
    let summary = RelationshipSummary::from_history(&maintenance_history);

    Some(EquipmentRelationship {
        equipment: record,
        maintenance_history,
        summary,
    })
}
