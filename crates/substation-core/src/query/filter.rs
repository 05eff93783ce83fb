use crate::record::{text, EquipmentRecord, MaintenanceRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Equipment filter criteria; an absent or empty criterion matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentFilter {
    /// Case-insensitive match on `equipment_type`
    pub equipment_type: Option<String>,
    /// Case-insensitive match on `status`
    pub status: Option<String>,
}

impl EquipmentFilter {
    #[must_use]
    pub fn with_type(mut self, equipment_type: impl Into<String>) -> Self {
        self.equipment_type = Some(equipment_type.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn matches(&self, record: &EquipmentRecord) -> bool {
        matches_label(&self.equipment_type, &record.equipment_type)
            && matches_label(&self.status, &record.status)
    }
}

/// Maintenance filter criteria; an absent or empty criterion matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceFilter {
    /// Exact, case-sensitive match on `equipment_id`
    pub equipment_id: Option<String>,
    /// Case-insensitive match on `status`
    pub status: Option<String>,
}

impl MaintenanceFilter {
    #[must_use]
    pub fn with_equipment_id(mut self, equipment_id: impl Into<String>) -> Self {
        self.equipment_id = Some(equipment_id.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn matches(&self, record: &MaintenanceRecord) -> bool {
        matches_key(&self.equipment_id, &record.equipment_id)
            && matches_label(&self.status, &record.status)
    }
}

pub fn filter_equipment<'a>(
    collection: &'a [EquipmentRecord],
    filter: &EquipmentFilter,
) -> Vec<&'a EquipmentRecord> {
    let matched: Vec<_> = collection.iter().filter(|r| filter.matches(r)).collect();
    debug!(?filter, matched = matched.len(), "filtered equipment");
    matched
}

pub fn filter_maintenance<'a>(
    collection: &'a [MaintenanceRecord],
    filter: &MaintenanceFilter,
) -> Vec<&'a MaintenanceRecord> {
    let matched: Vec<_> = collection.iter().filter(|r| filter.matches(r)).collect();
    debug!(?filter, matched = matched.len(), "filtered maintenance");
    matched
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// Statuses and types are free-text labels.
fn matches_label(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match criterion(wanted) {
        Some(wanted) => text(actual).to_lowercase() == wanted.to_lowercase(),
        None => true,
    }
}

// Identifiers are exact keys.
fn matches_key(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match criterion(wanted) {
        Some(wanted) => text(actual) == wanted,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<EquipmentRecord> {
        vec![
            EquipmentRecord::new("T1").with_type("Transformer").with_status("Active"),
            EquipmentRecord::new("G1").with_type("Generator").with_status("Active"),
            EquipmentRecord::new("T2").with_type("TRANSFORMER").with_status("Maintenance"),
            EquipmentRecord::new("X1"),
            EquipmentRecord::new("T3").with_type("transformer"),
        ]
    }

    fn ids(records: &[&EquipmentRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.equipment_id.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_type_filter_is_case_insensitive_and_ordered() {
        let fleet = fleet();
        let filter = EquipmentFilter::default().with_type("Transformer");
        let matched = filter_equipment(&fleet, &filter);
        assert_eq!(ids(&matched), vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_criteria_combine() {
        let fleet = fleet();
        let filter = EquipmentFilter::default()
            .with_type("transformer")
            .with_status("active");
        assert_eq!(ids(&filter_equipment(&fleet, &filter)), vec!["T1"]);
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let fleet = fleet();
        let filter = EquipmentFilter {
            equipment_type: Some(String::new()),
            status: None,
        };
        assert_eq!(filter_equipment(&fleet, &filter).len(), fleet.len());
    }

    #[test]
    fn test_missing_field_never_matches_non_empty_criterion() {
        let fleet = fleet();
        let matched = filter_equipment(&fleet, &EquipmentFilter::default().with_status("active"));
        assert!(matched.iter().all(|r| r.equipment_id.as_deref() != Some("X1")));
    }

    #[test]
    fn test_maintenance_equipment_id_is_case_sensitive() {
        let logs = vec![
            MaintenanceRecord::new("L1", "T1").with_status("Completed"),
            MaintenanceRecord::new("L2", "t1").with_status("completed"),
            MaintenanceRecord::new("L3", "T1").with_status("In Progress"),
        ];

        let by_id =
            filter_maintenance(&logs, &MaintenanceFilter::default().with_equipment_id("T1"));
        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id[0].log_id.as_deref(), Some("L1"));
        assert_eq!(by_id[1].log_id.as_deref(), Some("L3"));

        let by_status =
            filter_maintenance(&logs, &MaintenanceFilter::default().with_status("COMPLETED"));
        assert_eq!(by_status.len(), 2);

        let both = MaintenanceFilter::default()
            .with_equipment_id("T1")
            .with_status("completed");
        assert_eq!(filter_maintenance(&logs, &both).len(), 1);
    }

    #[test]
    fn test_maintenance_missing_status_never_matches() {
        let logs = vec![
            MaintenanceRecord::new("L1", "T1").with_status("Completed"),
            MaintenanceRecord::new("L2", "T1"),
        ];

        let filter = MaintenanceFilter::default().with_status("completed");
        let matched = filter_maintenance(&logs, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].log_id.as_deref(), Some("L1"));
    }

    #[test]
    fn test_maintenance_empty_criteria_match_everything() {
        let logs = vec![
            MaintenanceRecord::new("L1", "T1").with_status("Completed"),
            MaintenanceRecord::new("L2", "G1"),
        ];
        let filter = MaintenanceFilter {
            equipment_id: Some(String::new()),
            status: Some(String::new()),
        };
        assert_eq!(filter_maintenance(&logs, &filter).len(), logs.len());
    }
}
