use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollfolioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollfolioError::missing_dependency("x")
            .to_string()
            .contains("missing dependency:")
    );
    assert!(
        ScrollfolioError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ScrollfolioError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollfolioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: ScrollfolioError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ScrollfolioError::Serde(_)));
}
