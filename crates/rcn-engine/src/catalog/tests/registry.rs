use super::common::{document, document_json};
use crate::catalog::registry::{CatalogRegistry, RegistryError};
use crate::catalog::validate::{validate, ValidationError};

fn second_version_json() -> String {
    let mut doc = document();
    doc.version = "2025.2".to_string();
    doc.last_updated = "2025-08-01".to_string();
    serde_json::to_string(&doc).expect("document serializes")
}

#[test]
fn snapshot_before_any_load_is_a_configuration_fault() {
    let registry = CatalogRegistry::new();
    assert!(matches!(
        registry.snapshot(None),
        Err(RegistryError::NoneLoaded)
    ));
}

#[test]
fn first_load_becomes_active() {
    let registry = CatalogRegistry::new();
    let version = registry.load(&document_json()).expect("document loads");
    assert_eq!(version, "2025.1");

    let active = registry.snapshot(None).expect("active snapshot");
    assert_eq!(active.version(), "2025.1");
}

#[test]
fn later_loads_register_inactive() {
    let registry = CatalogRegistry::new();
    registry.load(&document_json()).expect("first load");
    registry.load(&second_version_json()).expect("second load");

    let active = registry.snapshot(None).expect("active snapshot");
    assert_eq!(active.version(), "2025.1");

    let named = registry
        .snapshot(Some("2025.2"))
        .expect("named snapshot");
    assert_eq!(named.version(), "2025.2");
}

#[test]
fn set_active_switches_versions() {
    let registry = CatalogRegistry::new();
    registry.load(&document_json()).expect("first load");
    registry.load(&second_version_json()).expect("second load");

    registry.set_active("2025.2").expect("known version");
    let active = registry.snapshot(None).expect("active snapshot");
    assert_eq!(active.version(), "2025.2");
}

#[test]
fn set_active_rejects_unknown_version() {
    let registry = CatalogRegistry::new();
    registry.load(&document_json()).expect("first load");

    match registry.set_active("1999.1") {
        Err(RegistryError::UnknownVersion(version)) => assert_eq!(version, "1999.1"),
        other => panic!("expected UnknownVersion, got {other:?}"),
    }
}

#[test]
fn failed_load_leaves_registry_untouched() {
    let registry = CatalogRegistry::new();
    registry.load(&document_json()).expect("first load");

    let mut broken = document();
    broken.version = "2025.9".to_string();
    broken.factors.regions[0].factor = -1.0;
    let raw = serde_json::to_string(&broken).expect("document serializes");

    assert!(matches!(
        registry.load(&raw),
        Err(ValidationError::NonPositiveFactor { .. })
    ));

    let active = registry.snapshot(None).expect("active snapshot");
    assert_eq!(active.version(), "2025.1");
    assert!(matches!(
        registry.snapshot(Some("2025.9")),
        Err(RegistryError::UnknownVersion(_))
    ));
}

#[test]
fn swap_registers_and_activates() {
    let registry = CatalogRegistry::new();
    registry.load(&document_json()).expect("first load");

    let mut doc = document();
    doc.version = "2025.3".to_string();
    registry.swap(validate(doc).expect("replacement validates"));

    let active = registry.snapshot(None).expect("active snapshot");
    assert_eq!(active.version(), "2025.3");
}

#[test]
fn captured_snapshot_survives_a_swap() {
    let registry = CatalogRegistry::new();
    registry.load(&document_json()).expect("first load");

    let held = registry.snapshot(None).expect("snapshot before swap");

    let mut doc = document();
    doc.version = "2025.4".to_string();
    registry.swap(validate(doc).expect("replacement validates"));

    // The earlier capture still reads entirely from its own version.
    assert_eq!(held.version(), "2025.1");
    let fresh = registry.snapshot(None).expect("snapshot after swap");
    assert_eq!(fresh.version(), "2025.4");
}

#[test]
fn versions_flags_the_active_entry() {
    let registry = CatalogRegistry::new();
    registry.load(&document_json()).expect("first load");
    registry.load(&second_version_json()).expect("second load");

    let listing = registry.versions();
    assert_eq!(listing.len(), 2);
    assert!(listing
        .iter()
        .any(|info| info.version == "2025.1" && info.active));
    assert!(listing
        .iter()
        .any(|info| info.version == "2025.2" && !info.active));
}
