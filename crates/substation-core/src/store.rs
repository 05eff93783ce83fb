//! Record Store
//!
//! The store owns the two loaded collections. Readers take a [`Snapshot`]
//! (two shared, immutable collections) and query it without holding any lock;
//! the loader swaps whole collections in, so a reader sees either the old
//! collection or the new one and never a partial load.

use crate::entities::{extract_entities, Entities};
use crate::error::QueryResult;
use crate::integrity::{validate, IntegrityIssue};
use crate::query::{
    build_equipment_relationships, filter_equipment, filter_maintenance, search,
    EquipmentFilter, EquipmentRelationship, MaintenanceFilter, SearchResults,
};
use crate::record::{EquipmentRecord, MaintenanceRecord};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Both collections as seen by one reader
#[derive(Debug, Clone)]
pub struct Snapshot {
    equipment: Arc<[EquipmentRecord]>,
    maintenance: Arc<[MaintenanceRecord]>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            equipment: Arc::from(Vec::new()),
            maintenance: Arc::from(Vec::new()),
        }
    }
}

impl Snapshot {
    pub fn new(equipment: Vec<EquipmentRecord>, maintenance: Vec<MaintenanceRecord>) -> Self {
        Self {
            equipment: Arc::from(equipment),
            maintenance: Arc::from(maintenance),
        }
    }

    pub fn equipment(&self) -> &[EquipmentRecord] {
        &self.equipment
    }

    pub fn maintenance(&self) -> &[MaintenanceRecord] {
        &self.maintenance
    }

    /// True when neither collection holds any record
    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty() && self.maintenance.is_empty()
    }

    pub fn filter_equipment(&self, filter: &EquipmentFilter) -> Vec<&EquipmentRecord> {
        filter_equipment(&self.equipment, filter)
    }

    pub fn filter_maintenance(&self, filter: &MaintenanceFilter) -> Vec<&MaintenanceRecord> {
        filter_maintenance(&self.maintenance, filter)
    }

    pub fn search(&self, query: &str) -> QueryResult<SearchResults<'_>> {
        search(query, &self.equipment, &self.maintenance)
    }

    pub fn relationships(&self, equipment_id: &str) -> Option<EquipmentRelationship<'_>> {
        build_equipment_relationships(equipment_id, &self.equipment, &self.maintenance)
    }

    pub fn entities(&self) -> Entities {
        extract_entities(&self.equipment, &self.maintenance)
    }

    pub fn validate(&self) -> Vec<IntegrityIssue> {
        validate(&self.equipment, &self.maintenance)
    }

    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            equipment_count: self.equipment.len(),
            maintenance_count: self.maintenance.len(),
            validation_issues: self.validate().len(),
        }
    }
}

/// Process-wide holder of the equipment and maintenance collections
#[derive(Debug, Default)]
pub struct RecordStore {
    current: RwLock<Snapshot>,
}

impl RecordStore {
    /// Empty store; both collections start empty until loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given collections
    pub fn from_records(
        equipment: Vec<EquipmentRecord>,
        maintenance: Vec<MaintenanceRecord>,
    ) -> Self {
        Self {
            current: RwLock::new(Snapshot::new(equipment, maintenance)),
        }
    }

    /// Consistent view of both collections
    pub fn snapshot(&self) -> Snapshot {
        self.current.read().clone()
    }

    pub fn current_equipment(&self) -> Arc<[EquipmentRecord]> {
        Arc::clone(&self.current.read().equipment)
    }

    pub fn current_maintenance(&self) -> Arc<[MaintenanceRecord]> {
        Arc::clone(&self.current.read().maintenance)
    }

    pub fn summary(&self) -> StoreSummary {
        self.snapshot().summary()
    }

    pub(crate) fn replace_equipment(&self, records: Vec<EquipmentRecord>) {
        let records: Arc<[EquipmentRecord]> = Arc::from(records);
        self.current.write().equipment = records;
    }

    pub(crate) fn replace_maintenance(&self, records: Vec<MaintenanceRecord>) {
        let records: Arc<[MaintenanceRecord]> = Arc::from(records);
        self.current.write().maintenance = records;
    }
}

/// Record counts plus the number of integrity issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub equipment_count: usize,
    pub maintenance_count: usize,
    pub validation_issues: usize,
}

impl StoreSummary {
    pub fn status(&self) -> HealthStatus {
        if self.validation_issues == 0 {
            HealthStatus::Healthy
        } else {
            HealthStatus::IssuesDetected
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    IssuesDetected,
}
