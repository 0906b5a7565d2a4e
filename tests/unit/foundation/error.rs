use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SeaglassError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SeaglassError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SeaglassError::from(serde_json::from_str::<u32>("x").unwrap_err())
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SeaglassError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: SeaglassError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, SeaglassError::Serde(_)));
}
