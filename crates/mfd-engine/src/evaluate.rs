//! Rule evaluation against machine parameters.

use mfd_core::MachineParameters;

use crate::classify::RuleId;

/// Fixed line frequency emitted by [`RuleId::LineFrequency`].
pub const LINE_FREQUENCY_HZ: f64 = 50.0;

/// Evaluates a rule to the ordered list of typical frequencies it implies.
///
/// The mapping is total over [`RuleId`] and pure: the same rule and
/// parameters always produce the same ordered set. Unspecified parameters
/// are zero, so a rule over a missing parameter yields zeros that the
/// tolerance matcher later rejects.
///
/// Arithmetic faults are absorbed here: if any computed value is NaN or
/// infinite the whole set collapses to empty, so one bad entry can never
/// abort a diagnosis batch.
pub fn evaluate(rule: RuleId, params: &MachineParameters) -> Vec<f64> {
    let values = match rule {
        RuleId::Harmonics1To4Fr => (1..=4).map(|i| params.fr * i as f64).collect(),
        RuleId::DoubleFr => vec![2.0 * params.fr],
        RuleId::ZTimesFr => vec![params.z * params.fr],
        RuleId::FsSidebands => vec![params.fs + params.fr, params.fs - params.fr],
        RuleId::FeSidebands => {
            let carrier = params.z * params.fr;
            vec![carrier + params.fr, carrier - params.fr]
        }
        RuleId::FractionalFrBand => vec![0.42 * params.fr, 0.48 * params.fr],
        RuleId::EqualsFr => vec![params.fr],
        RuleId::EqualsFs => vec![params.fs],
        RuleId::LineFrequency => vec![LINE_FREQUENCY_HZ],
        RuleId::Unknown => Vec::new(),
    };
    if values.iter().any(|value| !value.is_finite()) {
        return Vec::new();
    }
    values
}
