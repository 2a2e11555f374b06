use super::*;

fn entry_with_kinds(kinds: &[(Kind, &str)]) -> Entry {
    let mut entry = Entry::default();
    for (kind, raw) in kinds {
        entry.actions.insert(
            *kind,
            ActionLog {
                raw: (*raw).to_string(),
                changes: Vec::new(),
            },
        );
    }
    entry
}

#[test]
fn kind_field_names_round_trip() {
    for kind in Kind::ALL {
        assert_eq!(Kind::from_field_name(kind.field_name()), Some(kind));
    }
}

#[test]
fn unknown_field_name_maps_to_none() {
    assert_eq!(Kind::from_field_name("Start-Date"), None);
    assert_eq!(Kind::from_field_name("install"), None);
}

#[test]
fn kind_order_is_declaration_order() {
    assert_eq!(
        Kind::ALL,
        [
            Kind::Install,
            Kind::Reinstall,
            Kind::Upgrade,
            Kind::Downgrade,
            Kind::Remove,
            Kind::Purge,
        ]
    );
}

#[test]
fn short_codes_match_table() {
    let codes: Vec<&str> = Kind::ALL.into_iter().map(Kind::short_code).collect();
    assert_eq!(codes, ["I", "rI", "U", "D", "R", "P"]);
}

#[test]
fn single_action_summary_is_field_name() {
    let entry = entry_with_kinds(&[(Kind::Install, "a (1.0)")]);
    assert_eq!(entry.action_summary(), "Install");
}

#[test]
fn multi_action_summary_joins_short_codes() {
    let entry = entry_with_kinds(&[(Kind::Install, "a (1.0)"), (Kind::Remove, "b (2.0)")]);
    assert_eq!(entry.action_summary(), "I,R");
}

#[test]
fn multi_action_summary_has_no_trailing_comma() {
    let entry = entry_with_kinds(&[
        (Kind::Upgrade, "a (1.0, 2.0)"),
        (Kind::Purge, "b (2.0)"),
    ]);
    assert_eq!(entry.action_summary(), "U,P");
}

#[test]
fn all_kinds_summary_in_declared_order() {
    let entry = entry_with_kinds(&[
        (Kind::Install, "a (1)"),
        (Kind::Reinstall, "a (1)"),
        (Kind::Upgrade, "a (1, 2)"),
        (Kind::Downgrade, "a (2, 1)"),
        (Kind::Remove, "a (1)"),
        (Kind::Purge, "a (1)"),
    ]);
    assert_eq!(entry.action_summary(), "I,rI,U,D,R,P");
}

#[test]
fn empty_entry_summary_is_empty() {
    let entry = Entry::default();
    assert_eq!(entry.action_summary(), "");
}

#[test]
fn change_count_re_splits_raw_content() {
    let entry = entry_with_kinds(&[
        (Kind::Install, "a (1.0), b (2.0), c (3.0)"),
        (Kind::Remove, "d (4.0)"),
    ]);
    assert_eq!(entry.change_count(), 4);
}

#[test]
fn change_empty_has_default_fields() {
    let change = Change::empty(Kind::Upgrade);
    assert_eq!(change.kind, Kind::Upgrade);
    assert!(change.package.is_empty());
    assert!(change.current_version.is_empty());
    assert!(change.candidate_version.is_none());
    assert!(!change.automatic);
}
