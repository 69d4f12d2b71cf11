use proptest::prelude::*;
use xdep_coords::{ArtifactCoords, ArtifactKey};

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._-]{1,12}"
}

proptest! {
    #[test]
    fn test_coords_display_parses_back(
        group in segment(),
        artifact in segment(),
        classifier in proptest::option::of(segment()),
        artifact_type in segment(),
        version in segment(),
    ) {
        let coords = ArtifactCoords::new(
            group,
            artifact,
            classifier.as_deref(),
            artifact_type,
            version,
        );
        let reparsed = ArtifactCoords::parse(&coords.to_string()).unwrap();
        prop_assert_eq!(reparsed, coords);
    }

    #[test]
    fn test_key_ignores_version(
        group in segment(),
        artifact in segment(),
        v1 in segment(),
        v2 in segment(),
    ) {
        let a = ArtifactCoords::jar(group.as_str(), artifact.as_str(), v1);
        let b = ArtifactCoords::jar(group.as_str(), artifact.as_str(), v2);
        prop_assert_eq!(a.key(), b.key());
        prop_assert_eq!(a.key(), ArtifactKey::of(group, artifact));
    }

    #[test]
    fn test_parse_never_panics(s in "\\PC*") {
        let _ = ArtifactCoords::parse(&s);
        let _ = ArtifactKey::parse(&s);
    }
}
