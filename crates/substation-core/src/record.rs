//! Equipment and maintenance record types
//!
//! Records carry the conventional schema as named optional fields and keep
//! every other field verbatim in an `extra` bag, so a source with additional
//! columns round-trips through the API unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Fields outside the conventional schema, keyed by field name
pub type Extras = BTreeMap<String, Value>;

/// Common behaviour of the two record kinds.
///
/// Tabular sources produce records through [`Record::from_fields`]; document
/// sources go through serde directly.
pub trait Record: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Collection name used in diagnostics
    const KIND: &'static str;

    /// Build a record from string fields, as read from a tabular row
    fn from_fields(fields: BTreeMap<String, String>) -> Self;

    /// Text searched by substring queries: the fixed search fields joined by
    /// single spaces, missing fields contributing an empty segment.
    fn search_text(&self) -> String;
}

/// One piece of utility equipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub equipment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub equipment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Extras,
}

impl EquipmentRecord {
    pub fn new(equipment_id: impl Into<String>) -> Self {
        Self {
            equipment_id: Some(equipment_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, equipment_type: impl Into<String>) -> Self {
        self.equipment_type = Some(equipment_type.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl Record for EquipmentRecord {
    const KIND: &'static str = "equipment";

    fn from_fields(mut fields: BTreeMap<String, String>) -> Self {
        Self {
            equipment_id: fields.remove("equipment_id"),
            equipment_type: fields.remove("equipment_type"),
            location: fields.remove("location"),
            manufacturer: fields.remove("manufacturer"),
            model: fields.remove("model"),
            status: fields.remove("status"),
            extra: into_extras(fields),
        }
    }

    fn search_text(&self) -> String {
        join_segments(&[
            &self.equipment_id,
            &self.equipment_type,
            &self.location,
            &self.manufacturer,
            &self.model,
            &self.status,
        ])
    }
}

/// One maintenance log entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub log_id: Option<String>,

    /// Reference to [`EquipmentRecord::equipment_id`]; not enforced
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub equipment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub maintenance_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub technician: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub status: Option<String>,

    /// Kept as loaded: a number from document sources, a string from tabular ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Value>,

    #[serde(flatten)]
    pub extra: Extras,
}

impl MaintenanceRecord {
    pub fn new(log_id: impl Into<String>, equipment_id: impl Into<String>) -> Self {
        Self {
            log_id: Some(log_id.into()),
            equipment_id: Some(equipment_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, maintenance_type: impl Into<String>) -> Self {
        self.maintenance_type = Some(maintenance_type.into());
        self
    }

    #[must_use]
    pub fn with_technician(mut self, technician: impl Into<String>) -> Self {
        self.technician = Some(technician.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = serde_json::Number::from_f64(cost).map(Value::Number);
        self
    }

    /// Numeric cost of this entry.
    ///
    /// Numbers are taken as-is and numeric strings are parsed; a missing or
    /// non-numeric cost counts as zero.
    pub fn cost_amount(&self) -> f64 {
        let amount = match &self.cost {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        amount.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

impl Record for MaintenanceRecord {
    const KIND: &'static str = "maintenance";

    fn from_fields(mut fields: BTreeMap<String, String>) -> Self {
        Self {
            log_id: fields.remove("log_id"),
            equipment_id: fields.remove("equipment_id"),
            maintenance_type: fields.remove("maintenance_type"),
            technician: fields.remove("technician"),
            description: fields.remove("description"),
            status: fields.remove("status"),
            cost: fields.remove("cost").map(Value::String),
            extra: into_extras(fields),
        }
    }

    fn search_text(&self) -> String {
        join_segments(&[
            &self.log_id,
            &self.equipment_id,
            &self.maintenance_type,
            &self.technician,
            &self.description,
            &self.status,
        ])
    }
}

/// Field value with a missing field read as the empty string
pub(crate) fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn join_segments(fields: &[&Option<String>]) -> String {
    fields
        .iter()
        .map(|field| text(field))
        .collect::<Vec<_>>()
        .join(" ")
}

fn into_extras(fields: BTreeMap<String, String>) -> Extras {
    fields
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Accept any JSON scalar for a conventional text field; `null` reads as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a text value, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_fields_keeps_unknown_columns() {
        let fields = BTreeMap::from([
            ("equipment_id".to_string(), "EQ-1".to_string()),
            ("status".to_string(), String::new()),
            ("install_date".to_string(), "2019-04-01".to_string()),
        ]);
        let record = EquipmentRecord::from_fields(fields);

        assert_eq!(record.equipment_id.as_deref(), Some("EQ-1"));
        assert_eq!(record.status.as_deref(), Some(""));
        assert_eq!(record.location, None);
        assert_eq!(record.extra.get("install_date"), Some(&json!("2019-04-01")));
    }

    #[test]
    fn test_search_text_keeps_empty_segments() {
        let record = EquipmentRecord::new("EQ-1").with_status("Active");
        assert_eq!(record.search_text(), "EQ-1     Active");

        let log = MaintenanceRecord::new("L1", "EQ-1").with_technician("Ana");
        assert_eq!(log.search_text(), "L1 EQ-1  Ana  ");
    }

    #[test]
    fn test_document_decode_is_lenient_about_scalars() {
        let record: MaintenanceRecord = serde_json::from_value(json!({
            "log_id": 42,
            "equipment_id": "EQ-1",
            "technician": null,
            "cost": 1250.5,
            "duration_hours": 3
        }))
        .unwrap();

        assert_eq!(record.log_id.as_deref(), Some("42"));
        assert_eq!(record.technician, None);
        assert_eq!(record.cost_amount(), 1250.5);
        assert_eq!(record.extra.get("duration_hours"), Some(&json!(3)));
    }

    #[test]
    fn test_document_decode_rejects_nested_text_fields() {
        let result: Result<EquipmentRecord, _> =
            serde_json::from_value(json!({ "equipment_id": ["EQ-1"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_flattens_extras() {
        let mut record = EquipmentRecord::new("EQ-9").with_type("Transformer");
        record.extra.insert("voltage_kv".to_string(), json!(138));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "equipment_id": "EQ-9", "equipment_type": "Transformer", "voltage_kv": 138 })
        );
    }

    #[test]
    fn test_cost_amount() {
        let mut log = MaintenanceRecord::new("L1", "E1");
        assert_eq!(log.cost_amount(), 0.0);

        log.cost = Some(json!(" 300.25 "));
        assert_eq!(log.cost_amount(), 300.25);

        log.cost = Some(json!("n/a"));
        assert_eq!(log.cost_amount(), 0.0);

        log.cost = Some(json!(true));
        assert_eq!(log.cost_amount(), 0.0);

        assert_eq!(log.with_cost(80.0).cost_amount(), 80.0);
    }
}
