use mfd_core::{FaultSignature, MachineParameters};

#[test]
fn parameters_roundtrip_through_json() {
    let params = MachineParameters {
        fr: 50.0,
        fs: 60.0,
        z: 24.0,
        theta: 0.25,
        ..MachineParameters::default()
    };
    let json = serde_json::to_string(&params).expect("encode params");
    let restored: MachineParameters = serde_json::from_str(&json).expect("decode params");
    assert_eq!(params, restored);
}

#[test]
fn missing_parameter_fields_default_to_zero() {
    let params: MachineParameters = serde_json::from_str(r#"{"fr": 25.0}"#).expect("decode");
    assert_eq!(params.fr, 25.0);
    assert_eq!(params.fs, 0.0);
    assert_eq!(params.z, 0.0);
    assert_eq!(params.f_blades, 0.0);
}

#[test]
fn contact_angle_is_stored_in_radians() {
    let params = MachineParameters::default().with_contact_angle_degrees(180.0);
    assert!((params.theta - std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn signature_roundtrip_preserves_free_text() {
    let signature = FaultSignature::new(
        "Desalignement",
        "2*fr",
        "Axiale et radiale",
        "accouplement use",
    );
    let json = serde_json::to_string(&signature).expect("encode signature");
    let restored: FaultSignature = serde_json::from_str(&json).expect("decode signature");
    assert_eq!(signature, restored);
}
