//! Diagnosis orchestration: measured frequencies crossed with the catalog.

use mfd_core::{FaultSignature, MachineParameters};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, RuleId};
use crate::direction::direction_matches;
use crate::evaluate::evaluate;
use crate::tolerance::is_close;

/// A catalog signature together with its cached classification.
///
/// Classification depends only on the signature text, so it happens once
/// per catalog entry; evaluation is repeated per diagnosis run because
/// the machine parameters change between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSignature {
    /// The underlying catalog record.
    pub signature: FaultSignature,
    /// Rule derived from the signature text.
    pub rule: RuleId,
}

impl ClassifiedSignature {
    /// Classifies a signature record and caches the resulting rule.
    pub fn new(signature: FaultSignature) -> Self {
        let rule = classify(&signature.signature);
        Self { signature, rule }
    }
}

/// One positive diagnosis: a measured frequency matching a catalog fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisMatch {
    /// The measured frequency that triggered the match, in Hz.
    pub measured: f64,
    /// Name of the matched fault.
    pub fault: String,
    /// Rule that produced the typical frequency set.
    pub rule: RuleId,
    /// Full typical frequency set the rule evaluated to, not just the
    /// member that matched.
    pub typical: Vec<f64>,
    /// Probable cause text carried from the catalog.
    pub cause: String,
}

/// Cross-products measured frequencies with catalog entries and collects
/// every match.
///
/// Input order is preserved on both axes: measured frequencies iterate
/// outermost, catalog entries innermost. A frequency may match several
/// entries and an entry several frequencies; no deduplication happens.
/// An entry whose rule evaluates to an empty set simply contributes no
/// matches, so per-entry faults never abort the batch.
pub fn diagnose(
    measured: &[f64],
    entries: &[ClassifiedSignature],
    params: &MachineParameters,
    measured_direction: &str,
    tolerance: f64,
) -> Vec<DiagnosisMatch> {
    let mut matches = Vec::new();
    for &frequency in measured {
        for entry in entries {
            let typical = evaluate(entry.rule, params);
            if !typical.iter().any(|&t| is_close(frequency, t, tolerance)) {
                continue;
            }
            if !direction_matches(measured_direction, &entry.signature.direction) {
                continue;
            }
            matches.push(DiagnosisMatch {
                measured: frequency,
                fault: entry.signature.name.clone(),
                rule: entry.rule,
                typical,
                cause: entry.signature.cause.clone(),
            });
        }
    }
    matches
}
