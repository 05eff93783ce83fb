//! Loader
//!
//! Reads the equipment and maintenance sources into the [`RecordStore`].
//! A failed load resets the affected collection to empty and reports why;
//! it never aborts the process.

use crate::error::LoadError;
use crate::record::{EquipmentRecord, MaintenanceRecord, Record};
use crate::store::RecordStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Encoding of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Header row of field names, one record per following row
    Csv,
    /// Top-level array of objects
    Json,
}

impl SourceFormat {
    /// Format implied by the file extension, or `fallback` when there is none
    pub fn from_path(path: &Path, fallback: SourceFormat) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub path: PathBuf,
    pub format: SourceFormat,
}

impl DataSource {
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: SourceFormat::Csv,
        }
    }

    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: SourceFormat::Json,
        }
    }

    /// Source whose format follows the file extension
    pub fn infer(path: impl Into<PathBuf>, fallback: SourceFormat) -> Self {
        let path = path.into();
        let format = SourceFormat::from_path(&path, fallback);
        Self { path, format }
    }
}

/// Locations of both collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub equipment: DataSource,
    pub maintenance: DataSource,
}

impl DataSources {
    /// Infer formats from extensions; equipment defaults to CSV, maintenance to JSON
    pub fn new(equipment: impl Into<PathBuf>, maintenance: impl Into<PathBuf>) -> Self {
        Self {
            equipment: DataSource::infer(equipment, SourceFormat::Csv),
            maintenance: DataSource::infer(maintenance, SourceFormat::Json),
        }
    }
}

/// Outcome of loading both collections
#[derive(Debug)]
pub struct LoadReport {
    pub equipment: Result<usize, LoadError>,
    pub maintenance: Result<usize, LoadError>,
}

impl LoadReport {
    pub fn equipment_loaded(&self) -> bool {
        self.equipment.is_ok()
    }

    pub fn maintenance_loaded(&self) -> bool {
        self.maintenance.is_ok()
    }

    pub fn all_loaded(&self) -> bool {
        self.equipment_loaded() && self.maintenance_loaded()
    }

    /// Errors from whichever loads failed
    pub fn errors(&self) -> impl Iterator<Item = &LoadError> {
        [&self.equipment, &self.maintenance]
            .into_iter()
            .filter_map(|outcome| outcome.as_ref().err())
    }
}

/// Decode every record of `source`, in source order
pub fn read_records<R: Record>(source: &DataSource) -> Result<Vec<R>, LoadError> {
    let bytes = fs::read(&source.path).map_err(|source_err| LoadError::SourceUnavailable {
        kind: R::KIND,
        path: source.path.clone(),
        source: source_err,
    })?;

    match source.format {
        SourceFormat::Csv => decode_csv(&bytes, &source.path),
        SourceFormat::Json => serde_json::from_slice::<Vec<R>>(&bytes)
            .map_err(|e| LoadError::decode(R::KIND, &source.path, e)),
    }
}

fn decode_csv<R: Record>(bytes: &[u8], path: &Path) -> Result<Vec<R>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::decode(R::KIND, path, e))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| LoadError::decode(R::KIND, path, e))?;
        if row.len() > headers.len() {
            debug!(
                kind = R::KIND,
                line = row.position().map(|p| p.line()),
                dropped = row.len() - headers.len(),
                "ignoring cells past the header"
            );
        }
        // Short rows leave their trailing fields absent
        let fields: BTreeMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(R::from_fields(fields));
    }
    Ok(records)
}

/// Replace the equipment collection with the contents of `source`
pub fn load_equipment(store: &RecordStore, source: &DataSource) -> Result<usize, LoadError> {
    load_into::<EquipmentRecord, _>(source, |records| store.replace_equipment(records))
}

/// Replace the maintenance collection with the contents of `source`
pub fn load_maintenance(store: &RecordStore, source: &DataSource) -> Result<usize, LoadError> {
    load_into::<MaintenanceRecord, _>(source, |records| store.replace_maintenance(records))
}

/// Load both collections, reporting each outcome
pub fn load_all(store: &RecordStore, sources: &DataSources) -> LoadReport {
    LoadReport {
        equipment: load_equipment(store, &sources.equipment),
        maintenance: load_maintenance(store, &sources.maintenance),
    }
}

fn load_into<R, F>(source: &DataSource, replace: F) -> Result<usize, LoadError>
where
    R: Record,
    F: FnOnce(Vec<R>),
{
    match read_records::<R>(source) {
        Ok(records) => {
            let count = records.len();
            replace(records);
            info!(kind = R::KIND, path = %source.path.display(), count, "loaded records");
            Ok(count)
        }
        Err(err) => {
            replace(Vec::new());
            if err.is_source_unavailable() {
                warn!(kind = R::KIND, path = %source.path.display(), "source not found: {err}");
            } else {
                warn!(kind = R::KIND, path = %source.path.display(), "load failed: {err}");
            }
            Err(err)
        }
    }
}
