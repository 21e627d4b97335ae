//! CSV fault-signature catalog loading.
//!
//! The catalog is authored as a spreadsheet and exported to CSV with one
//! row per fault: name, frequency-signature description, direction, and
//! cause/remarks. Header names are trimmed and resolved through alias
//! lists covering both the documented English names and the French
//! spreadsheet headers, so an untouched export loads directly.
//! Rows missing a name or signature are dropped before they reach the
//! engine; signatures that survive are classified once at load time.

use std::fs;
use std::path::Path;

use csv::StringRecord;
use mfd_core::{ErrorInfo, FaultSignature, MfdError};
use mfd_engine::{hash_bytes, ClassifiedSignature};
use serde::{Deserialize, Serialize};

const NAME_ALIASES: [&str; 3] = ["name", "fault", "anomalie"];
const SIGNATURE_ALIASES: [&str; 4] = [
    "signature",
    "typical frequency",
    "frequence typique",
    "fréquence typique",
];
const DIRECTION_ALIASES: [&str; 1] = ["direction"];
const CAUSE_ALIASES: [&str; 3] = ["cause", "remarks", "remarques"];

fn catalog_error(code: &str, message: impl Into<String>) -> MfdError {
    MfdError::Catalog(ErrorInfo::new(code, message))
}

/// An ordered fault-signature catalog ready for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    /// Catalog entries in source order, each with its cached rule.
    pub entries: Vec<ClassifiedSignature>,
    /// Sha256 hex digest of the raw catalog bytes.
    pub source_hash: String,
    /// Number of rows dropped for missing name or signature.
    pub dropped_rows: usize,
}

impl Catalog {
    /// An empty catalog, used when loading fails non-fatally.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of usable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct ColumnIndices {
    name: usize,
    signature: usize,
    direction: Option<usize>,
    cause: Option<usize>,
}

fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().to_lowercase();
        aliases
            .iter()
            .any(|alias| header == *alias || header.starts_with(alias))
    })
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord) -> Result<Self, MfdError> {
        let name = find_column(headers, &NAME_ALIASES).ok_or_else(|| {
            catalog_error("missing-name-column", "catalog has no fault name column")
        })?;
        let signature = find_column(headers, &SIGNATURE_ALIASES).ok_or_else(|| {
            catalog_error(
                "missing-signature-column",
                "catalog has no frequency signature column",
            )
        })?;
        Ok(Self {
            name,
            signature,
            direction: find_column(headers, &DIRECTION_ALIASES),
            cause: find_column(headers, &CAUSE_ALIASES),
        })
    }
}

fn field(record: &StringRecord, index: Option<usize>) -> &str {
    index
        .and_then(|index| record.get(index))
        .unwrap_or("")
        .trim()
}

/// Loads a catalog from a CSV file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, MfdError> {
    let bytes = fs::read(path).map_err(|err| {
        MfdError::Catalog(
            ErrorInfo::new("catalog-read", err.to_string())
                .with_context("path", path.display().to_string())
                .with_hint("expected a CSV export of the fault catalog"),
        )
    })?;
    catalog_from_bytes(&bytes)
}

/// Parses a catalog from raw CSV bytes.
pub fn catalog_from_bytes(bytes: &[u8]) -> Result<Catalog, MfdError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|err| catalog_error("catalog-headers", err.to_string()))?
        .clone();
    let columns = ColumnIndices::resolve(&headers)?;

    let mut entries = Vec::new();
    let mut dropped_rows = 0;
    for record in reader.records() {
        let record = record.map_err(|err| catalog_error("catalog-row", err.to_string()))?;
        let name = field(&record, Some(columns.name));
        let signature = field(&record, Some(columns.signature));
        if name.is_empty() || signature.is_empty() {
            dropped_rows += 1;
            continue;
        }
        let direction = field(&record, columns.direction);
        let cause = field(&record, columns.cause);
        entries.push(ClassifiedSignature::new(FaultSignature::new(
            name, signature, direction, cause,
        )));
    }

    Ok(Catalog {
        entries,
        source_hash: hash_bytes(bytes),
        dropped_rows,
    })
}
