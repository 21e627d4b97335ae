//! Free-text signature classification into a closed rule set.
//!
//! Catalog authors describe characteristic frequencies informally
//! ("2*fr", "fs ± fr", "1 à 4 fr"). The classifier is a heuristic
//! interpreter over that text, not a grammar: an ordered list of
//! substring predicates is evaluated first-match-wins, and the ordering
//! is the complete disambiguation policy. A text matching several
//! patterns (e.g. containing both "fr" and "fs") resolves to the
//! earliest-listed rule.

use serde::{Deserialize, Serialize};

/// Symbolic identifier for a known frequency-signature pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Rotation harmonics 1 through 4 (unbalance family).
    Harmonics1To4Fr,
    /// Twice the rotation frequency (misalignment family).
    DoubleFr,
    /// Tooth count times rotation frequency (gear mesh).
    ZTimesFr,
    /// Sidebands around the supply frequency.
    FsSidebands,
    /// Sidebands around the gear-mesh carrier.
    FeSidebands,
    /// Sub-synchronous band at 0.42 to 0.48 of rotation (oil whirl).
    FractionalFrBand,
    /// Exactly the rotation frequency.
    EqualsFr,
    /// Exactly the supply frequency.
    EqualsFs,
    /// Fixed 50 Hz line frequency.
    LineFrequency,
    /// No known pattern; evaluates to an empty frequency set.
    Unknown,
}

type Predicate = fn(&str) -> bool;

/// Ordered classification table. First match wins; order must not change.
fn rule_table() -> [(Predicate, RuleId); 9] {
    [
        (
            |f| (f.contains("1 à 4") || f.contains("1 to 4")) && f.contains("fr"),
            RuleId::Harmonics1To4Fr,
        ),
        (
            |f| f.contains("2*fr") || f.contains("2⋅fr"),
            RuleId::DoubleFr,
        ),
        (
            |f| f.contains("z × fr") || f.contains("z*fr"),
            RuleId::ZTimesFr,
        ),
        (|f| f.contains("fs ± fr"), RuleId::FsSidebands),
        (|f| f.contains("fe ± fr"), RuleId::FeSidebands),
        (
            |f| f.contains("0.42") && f.contains("fr"),
            RuleId::FractionalFrBand,
        ),
        (|f| f == "fr" || f.contains("= fr"), RuleId::EqualsFr),
        (|f| f.contains("fs"), RuleId::EqualsFs),
        (|f| f.contains("50"), RuleId::LineFrequency),
    ]
}

/// Classifies a free-text frequency-signature description.
///
/// The input is lower-cased and whitespace-trimmed before matching.
/// Unrecognised text maps to [`RuleId::Unknown`] rather than an error.
pub fn classify(raw: &str) -> RuleId {
    let normalized = raw.trim().to_lowercase();
    for (predicate, rule) in rule_table() {
        if predicate(&normalized) {
            return rule;
        }
    }
    RuleId::Unknown
}
