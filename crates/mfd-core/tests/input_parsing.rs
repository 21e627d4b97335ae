use mfd_core::{parse_measured_frequencies, MfdError};

#[test]
fn parses_comma_separated_values() {
    let parsed = parse_measured_frequencies("50, 100,120.5").expect("parse");
    assert_eq!(parsed, vec![50.0, 100.0, 120.5]);
}

#[test]
fn skips_empty_tokens() {
    let parsed = parse_measured_frequencies(" 50 ,, 100, ").expect("parse");
    assert_eq!(parsed, vec![50.0, 100.0]);
}

#[test]
fn empty_input_yields_no_frequencies() {
    let parsed = parse_measured_frequencies("   ").expect("parse");
    assert!(parsed.is_empty());
}

#[test]
fn rejects_non_numeric_tokens() {
    let err = parse_measured_frequencies("50, abc, 100").expect_err("must fail");
    match err {
        MfdError::Input(info) => {
            assert_eq!(info.code, "bad-frequency-token");
            assert_eq!(info.context.get("token").map(String::as_str), Some("abc"));
        }
        other => panic!("unexpected error family: {other:?}"),
    }
}

#[test]
fn rejects_non_finite_tokens() {
    let err = parse_measured_frequencies("inf").expect_err("must fail");
    assert_eq!(err.info().code, "non-finite-frequency");
}
