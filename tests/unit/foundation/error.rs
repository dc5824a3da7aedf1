use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardflowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardflowError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        CardflowError::script("x")
            .to_string()
            .contains("script error:")
    );
    assert!(
        CardflowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardflowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: CardflowError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CardflowError::Serde(_)));
}
