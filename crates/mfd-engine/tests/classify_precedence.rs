use mfd_engine::{classify, RuleId};

#[test]
fn known_patterns_classify_to_their_rules() {
    assert_eq!(classify("1 à 4 fr"), RuleId::Harmonics1To4Fr);
    assert_eq!(classify("harmoniques 1 to 4 de fr"), RuleId::Harmonics1To4Fr);
    assert_eq!(classify("2*fr"), RuleId::DoubleFr);
    assert_eq!(classify("2⋅fr"), RuleId::DoubleFr);
    assert_eq!(classify("Z × fr"), RuleId::ZTimesFr);
    assert_eq!(classify("z*fr"), RuleId::ZTimesFr);
    assert_eq!(classify("fs ± fr"), RuleId::FsSidebands);
    assert_eq!(classify("fe ± fr"), RuleId::FeSidebands);
    assert_eq!(classify("0.42 à 0.48 fr"), RuleId::FractionalFrBand);
    assert_eq!(classify("fr"), RuleId::EqualsFr);
    assert_eq!(classify("f = fr"), RuleId::EqualsFr);
    assert_eq!(classify("fs"), RuleId::EqualsFs);
    assert_eq!(classify("50 Hz"), RuleId::LineFrequency);
    assert_eq!(classify("bruit large bande"), RuleId::Unknown);
}

#[test]
fn input_is_trimmed_and_lowercased() {
    assert_eq!(classify("  FR  "), RuleId::EqualsFr);
    assert_eq!(classify("2*FR"), RuleId::DoubleFr);
    assert_eq!(classify("FS ± FR"), RuleId::FsSidebands);
}

#[test]
fn earlier_rules_win_over_later_ones() {
    // "= fr" would also satisfy the bare-"fs" predicate; the ordered
    // table must resolve to the earlier rule.
    assert_eq!(classify("fs = fr"), RuleId::EqualsFr);
    // Harmonic range outranks the bare rotation rule.
    assert_eq!(classify("1 à 4 × fr"), RuleId::Harmonics1To4Fr);
    // Gear mesh outranks supply-frequency fallback.
    assert_eq!(classify("z*fr et fs"), RuleId::ZTimesFr);
    // Sidebands outrank the bare-"fs" fallback.
    assert_eq!(classify("fs ± fr autour de fs"), RuleId::FsSidebands);
    // A double-rotation marker outranks the fractional band.
    assert_eq!(classify("2*fr vers 0.42 fr"), RuleId::DoubleFr);
}

#[test]
fn line_frequency_is_the_last_resort_before_unknown() {
    assert_eq!(classify("pics à 50"), RuleId::LineFrequency);
    // "fs" anywhere in the text preempts the 50 Hz constant.
    assert_eq!(classify("fs vers 50"), RuleId::EqualsFs);
}
