use crate::error::{QueryError, QueryResult};
use crate::record::{EquipmentRecord, MaintenanceRecord, Record};
use serde::Serialize;
use tracing::debug;

/// Matches from both collections, each in original order
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults<'a> {
    pub equipment: Vec<&'a EquipmentRecord>,
    pub maintenance: Vec<&'a MaintenanceRecord>,
}

impl SearchResults<'_> {
    /// Combined number of matches
    pub fn total(&self) -> usize {
        self.equipment.len() + self.maintenance.len()
    }
}

/// Case-insensitive substring search over the fixed search fields of every
/// record (see [`Record::search_text`]).
///
/// A query that is empty after trimming is rejected with
/// [`QueryError::InvalidQuery`].
pub fn search<'a>(
    query: &str,
    equipment: &'a [EquipmentRecord],
    maintenance: &'a [MaintenanceRecord],
) -> QueryResult<SearchResults<'a>> {
    if query.trim().is_empty() {
        return Err(QueryError::InvalidQuery);
    }

    let needle = query.to_lowercase();
    let results = SearchResults {
        equipment: matching(equipment, &needle),
        maintenance: matching(maintenance, &needle),
    };

    debug!(
        query,
        equipment = results.equipment.len(),
        maintenance = results.maintenance.len(),
        "search completed"
    );
    Ok(results)
}

fn matching<'a, R: Record>(collection: &'a [R], needle: &str) -> Vec<&'a R> {
    collection
        .iter()
        .filter(|record| record.search_text().to_lowercase().contains(needle))
        .collect()
}
