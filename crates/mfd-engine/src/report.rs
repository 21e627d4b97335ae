use mfd_core::{MachineParameters, MfdError, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::diagnose::DiagnosisMatch;
use crate::hash::hash_json;

/// Provenance metadata bundled with a [`DiagnosisReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisProvenance {
    /// Source commit (if available) or package version.
    pub tool_version: String,
    /// Content hash of the catalog the diagnosis ran against.
    pub catalog_hash: String,
    /// Relative tolerance used for frequency matching.
    pub tolerance: f64,
    /// Direction the operator measured along.
    pub measured_direction: String,
    /// Machine parameters the rules were evaluated against.
    pub parameters: MachineParameters,
}

/// Result artifact for one diagnosis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// Content addressed hash of the report body.
    pub report_hash: String,
    /// Ordered match list; empty means "no known fault detected".
    pub matches: Vec<DiagnosisMatch>,
    /// Provenance describing the inputs that produced the matches.
    pub provenance: DiagnosisProvenance,
}

impl DiagnosisReport {
    /// True when the diagnosis found no matching fault.
    pub fn no_fault_detected(&self) -> bool {
        self.matches.is_empty()
    }
}

fn tool_version_string() -> String {
    option_env!("GIT_COMMIT_HASH")
        .map(|value| value.to_string())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}

/// Wraps a match list into a content-addressed [`DiagnosisReport`].
pub fn build_report(
    matches: Vec<DiagnosisMatch>,
    catalog_hash: impl Into<String>,
    params: &MachineParameters,
    measured_direction: impl Into<String>,
    tolerance: f64,
) -> Result<DiagnosisReport, MfdError> {
    let provenance = DiagnosisProvenance {
        tool_version: tool_version_string(),
        catalog_hash: catalog_hash.into(),
        tolerance,
        measured_direction: measured_direction.into(),
        parameters: *params,
    };

    let mut report = DiagnosisReport {
        schema_version: SchemaVersion::default(),
        report_hash: String::new(),
        matches,
        provenance,
    };
    report.report_hash = hash_json(&(&report.matches, &report.provenance))?;
    Ok(report)
}
