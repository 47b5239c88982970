use labreport::registry;
use labreport::state::PanelState;

#[test]
fn test_every_panel_starts_collapsed() {
    let state = PanelState::new();
    for record in registry::records() {
        assert!(!state.is_expanded(record.key), "{} not collapsed", record.key);
    }
}

#[test]
fn test_toggle_inverts() {
    let mut state = PanelState::new();

    assert!(state.toggle("starch-test"));
    assert!(state.is_expanded("starch-test"));

    assert!(!state.toggle("starch-test"));
    assert!(!state.is_expanded("starch-test"));
}

#[test]
fn test_double_toggle_is_identity() {
    let mut state = PanelState::new();
    state.set("errors", true);

    for record in registry::records() {
        let before = state.is_expanded(record.key);
        state.toggle(record.key);
        state.toggle(record.key);
        assert_eq!(state.is_expanded(record.key), before);
    }
}

#[test]
fn test_toggle_never_touches_other_panels() {
    let mut state = PanelState::new();
    state.set("conclusion", true);

    state.toggle("starch-test");

    assert!(state.is_expanded("conclusion"));
    assert!(!state.is_expanded("fat-test"));
    assert!(!state.is_expanded("protein-test"));

    let mut keys: Vec<&str> = state.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["conclusion", "starch-test"]);
}

#[test]
fn test_absent_and_false_are_equivalent() {
    let mut state = PanelState::new();
    assert!(!state.is_expanded("references"));

    state.set("references", false);
    assert!(!state.is_expanded("references"));
}
