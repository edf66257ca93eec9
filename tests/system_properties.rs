// tests/system_properties.rs

//! Whitelisted property forwarding via `add_system_property`.

use joblaunch::launch::add_system_property;
use joblaunch_test_utils::fake_executor::MapProperties;

#[test]
fn default_used_when_property_absent() {
    let props = MapProperties::new();
    let mut cmd = Vec::new();

    add_system_property(&props, &mut cmd, "foo", Some("bar"), None);

    assert_eq!(cmd, vec!["-Dfoo=bar"]);
}

#[test]
fn present_value_wins_over_default() {
    let props = MapProperties::new().set("foo", "42");
    let mut cmd = Vec::new();

    add_system_property(&props, &mut cmd, "foo", Some("bar"), None);

    assert_eq!(cmd, vec!["-Dfoo=42"]);
}

#[test]
fn absent_property_without_default_is_a_noop() {
    let props = MapProperties::new();
    let mut cmd = vec!["-Dalready=there".to_string()];

    add_system_property(&props, &mut cmd, "foo", None, None);

    assert_eq!(cmd, vec!["-Dalready=there"]);
}

#[test]
fn append_suffix_extends_a_present_value() {
    let props = MapProperties::new().set("foo", "42");
    let mut cmd = Vec::new();

    add_system_property(&props, &mut cmd, "foo", None, Some(":suffix"));

    assert_eq!(cmd, vec!["-Dfoo=42:suffix"]);
}

#[test]
fn append_suffix_is_not_applied_to_the_default() {
    let props = MapProperties::new();
    let mut cmd = Vec::new();

    add_system_property(&props, &mut cmd, "foo", Some("bar"), Some(":suffix"));

    assert_eq!(cmd, vec!["-Dfoo=bar"]);
}
