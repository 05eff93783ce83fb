//! Integrity Validator
//!
//! Advisory cross-checks between the two collections. Issues are returned as
//! data and never block serving.

use crate::record::{EquipmentRecord, MaintenanceRecord};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    NoEquipmentData,
    NoMaintenanceData,
    /// A maintenance record whose `equipment_id` resolves to no equipment
    OrphanedMaintenance {
        log_id: Option<String>,
        equipment_id: Option<String>,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEquipmentData => write!(f, "No equipment data loaded"),
            Self::NoMaintenanceData => write!(f, "No maintenance data loaded"),
            Self::OrphanedMaintenance {
                log_id,
                equipment_id,
            } => write!(
                f,
                "Maintenance record {} references unknown equipment {}",
                log_id.as_deref().unwrap_or("<no log id>"),
                equipment_id.as_deref().unwrap_or("<no equipment id>"),
            ),
        }
    }
}

impl Serialize for IntegrityIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check both collections, in order: empty equipment, empty maintenance,
/// then one issue per orphaned maintenance record in collection order.
///
/// Absent ids take part in resolution: a maintenance record without an
/// `equipment_id` resolves if some equipment record also lacks one.
pub fn validate(
    equipment: &[EquipmentRecord],
    maintenance: &[MaintenanceRecord],
) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    if equipment.is_empty() {
        issues.push(IntegrityIssue::NoEquipmentData);
    }
    if maintenance.is_empty() {
        issues.push(IntegrityIssue::NoMaintenanceData);
    }

    let known: HashSet<Option<&str>> = equipment
        .iter()
        .map(|eq| eq.equipment_id.as_deref())
        .collect();

    issues.extend(
        maintenance
            .iter()
            .filter(|log| !known.contains(&log.equipment_id.as_deref()))
            .map(|log| IntegrityIssue::OrphanedMaintenance {
                log_id: log.log_id.clone(),
                equipment_id: log.equipment_id.clone(),
            }),
    );

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_orphan_is_reported() {
        let equipment = vec![EquipmentRecord::new("E1")];
        let maintenance = vec![MaintenanceRecord::new("L1", "E2")];
        let issues = validate(&equipment, &maintenance);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].to_string().contains("L1"));
        assert_eq!(
            issues[0].to_string(),
            "Maintenance record L1 references unknown equipment E2"
        );
    }

    #[test]
    fn test_consistent_collections_have_no_issues() {
        let equipment = vec![EquipmentRecord::new("E1"), EquipmentRecord::new("E2")];
        let maintenance = vec![
            MaintenanceRecord::new("L1", "E2"),
            MaintenanceRecord::new("L2", "E1"),
        ];
        assert!(validate(&equipment, &maintenance).is_empty());
    }

    #[test]
    fn test_issue_order() {
        let maintenance = vec![
            MaintenanceRecord::new("L2", "X"),
            MaintenanceRecord::new("L1", "Y"),
        ];
        let issues = validate(&[], &maintenance);
        assert_eq!(issues[0], IntegrityIssue::NoEquipmentData);
        assert!(matches!(
            &issues[1],
            IntegrityIssue::OrphanedMaintenance { log_id: Some(id), .. } if id == "L2"
        ));
        assert!(matches!(
            &issues[2],
            IntegrityIssue::OrphanedMaintenance { log_id: Some(id), .. } if id == "L1"
        ));

        assert_eq!(
            validate(&[], &[]),
            vec![IntegrityIssue::NoEquipmentData, IntegrityIssue::NoMaintenanceData]
        );
    }

    #[test]
    fn test_absent_ids_resolve_against_absent_ids() {
        let without_id = MaintenanceRecord {
            log_id: Some("L1".to_string()),
            ..MaintenanceRecord::default()
        };
        let issues = validate(&[EquipmentRecord::default()], &[without_id.clone()]);
        assert!(issues.is_empty());

        let issues = validate(&[EquipmentRecord::new("E1")], &[without_id]);
        assert_eq!(
            issues[0].to_string(),
            "Maintenance record L1 references unknown equipment <no equipment id>"
        );
    }

    #[test]
    fn test_issue_serializes_as_message() {
        let value = serde_json::to_value(IntegrityIssue::NoMaintenanceData).unwrap();
        assert_eq!(value, serde_json::json!("No maintenance data loaded"));
    }
}
