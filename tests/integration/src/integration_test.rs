//! End-to-end integration test for extension resolution
//!
//! Exercises the complete flow: artifact list -> descriptor lookup ->
//! parsing -> condition evaluation -> activation plan, against the
//! checked-in fixtures and freshly built jars.

use std::collections::BTreeSet;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use xdep_coords::{ArtifactCoords, ArtifactKey, DependencyRequest};
use xdep_extensions::{
    ExtensionResolver, PresentArtifacts, ResolverConfig, exists_by_name_only, plan_activation,
    satisfied,
};
use xdep_fs::ResolvedArtifact;
use xdep_test_utils::TestArtifacts;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/artifacts")
        .join(name)
}

fn artifact(coords: &str, path: PathBuf) -> ResolvedArtifact {
    ResolvedArtifact::new(ArtifactCoords::parse(coords).unwrap(), path)
}

#[test]
fn test_checked_in_fixture_and_rebuilt_jar_agree() {
    let widgets_dir = fixture("widgets-classes");
    let content = std::fs::read_to_string(widgets_dir.join(xdep_fs::DESCRIPTOR_PATH)).unwrap();

    let fs = TestArtifacts::new();
    let widgets_jar = fs.jar("widgets-1.0.0.jar", Some(&content));

    let resolver = ExtensionResolver::default();
    let from_dir = resolver
        .resolve(&artifact("io.acme:widgets:1.0.0", widgets_dir))
        .unwrap()
        .expect("fixture directory carries a descriptor");
    let from_jar = resolver
        .resolve(&artifact("io.acme:widgets:1.0.0", widgets_jar))
        .unwrap()
        .expect("jar carries a descriptor");

    assert_eq!(from_dir, from_jar);
    assert_eq!(
        from_dir.deployment,
        ArtifactCoords::jar("io.acme", "widgets-deployment", "1.0.0")
    );
    assert_eq!(
        from_dir.required_keys,
        BTreeSet::from([ArtifactKey::of("io.acme", "rest-server")])
    );
}

#[test]
fn test_build_with_and_without_trigger() {
    let fs = TestArtifacts::new();
    let rest_server = fs.jar("rest-server-3.1.jar", None);
    let metrics = fs.jar("widgets-metrics-0.9.jar", None);

    let base = vec![
        artifact("io.acme:widgets:1.0.0", fixture("widgets-classes")),
        artifact("io.acme:app:1.0.0", fixture("plain-classes")),
        artifact("io.acme:widgets-metrics:0.9", metrics),
        artifact("io.acme:gone:1.0", fs.missing("gone-1.0.jar")),
    ];
    let config = ResolverConfig::default();
    let resolver = ExtensionResolver::new(&config);

    let descriptors = resolver.resolve_all(&base).into_result().unwrap();
    assert_eq!(descriptors.len(), 1);
    let plan = plan_activation(&descriptors, &PresentArtifacts::new(&base));
    assert!(plan.activated.is_empty());
    assert_eq!(
        plan.skipped[0].missing_keys,
        vec![ArtifactKey::of("io.acme", "rest-server")]
    );

    let mut with_trigger = base.clone();
    with_trigger.push(artifact("io.acme:rest-server:3.1", rest_server));
    let descriptors = resolver.resolve_all(&with_trigger).into_result().unwrap();
    let present = PresentArtifacts::new(&with_trigger);
    let plan = plan_activation(&descriptors, &present);

    let added: Vec<&DependencyRequest> = plan.dependencies().collect();
    assert_eq!(
        added,
        vec![&DependencyRequest::new("io.acme", "widgets-rest", "1.0.0")]
    );
}

#[test]
fn test_name_match_and_key_match_stay_distinct() {
    let fs = TestArtifacts::new();
    let present = vec![artifact("g:b:x:2.0", fs.jar("b-2.0-x.jar", None))];

    assert!(exists_by_name_only(
        &present,
        &DependencyRequest::new("g", "b", "1.0")
    ));
    assert!(!satisfied(
        &[ArtifactKey::new("g", "b", Some("y"), "jar")],
        &present
    ));
    assert!(satisfied(
        &[ArtifactKey::new("g", "b", Some("x"), "jar")],
        &present
    ));
}
