use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShapeError::coordinate("x")
            .to_string()
            .contains("coordinate error:")
    );
    assert!(ShapeError::color("x").to_string().contains("color error:"));
    assert!(
        ShapeError::thickness("x")
            .to_string()
            .contains("thickness error:")
    );
    assert!(ShapeError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source_and_counts_as_io() {
    let base = std::io::Error::other("boom");
    let err = ShapeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn exit_codes_are_distinct_and_nonzero() {
    let kinds = [
        ErrorKind::InvalidCoordinateFormat,
        ErrorKind::InvalidColorFormat,
        ErrorKind::SameInputOutputPath,
        ErrorKind::InvalidHexagonArgs,
        ErrorKind::MissingInputFile,
        ErrorKind::MultipleActionsRequested,
        ErrorKind::UnknownOption,
        ErrorKind::InvalidThickness,
        ErrorKind::IoFailure,
        ErrorKind::UnsupportedChannelLayout,
    ];
    let mut codes: Vec<u8> = kinds.iter().map(|k| k.exit_code()).collect();
    assert!(codes.iter().all(|&c| c != 0));
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}

#[test]
fn constructors_map_to_expected_kinds() {
    assert_eq!(ShapeError::color("x").exit_code(), 41);
    assert_eq!(ShapeError::hexagon("x").kind(), ErrorKind::InvalidHexagonArgs);
    assert_eq!(
        ShapeError::channels("x").kind(),
        ErrorKind::UnsupportedChannelLayout
    );
    assert_eq!(ShapeError::unknown_option("x").exit_code(), 46);
}
