use labreport::app::App;
use labreport::registry::{record, records};
use labreport::state::PanelState;
use labreport::view::{self, header_id, panel, panel_key};
use reportdom::{find_element, hit_test, layout, Content, Element, Event, MouseButton, Rect};

fn collect_texts<'a>(el: &'a Element, out: &mut Vec<&'a str>) {
    match &el.content {
        Content::Text(text) => out.push(text),
        Content::Children(children) => {
            for child in children {
                collect_texts(child, out);
            }
        }
        _ => {}
    }
}

fn texts(el: &Element) -> Vec<&str> {
    let mut out = Vec::new();
    collect_texts(el, &mut out);
    out
}

fn count_ids_with_suffix(el: &Element, suffix: &str) -> usize {
    let own = usize::from(el.id.ends_with(suffix));
    match &el.content {
        Content::Children(children) => {
            own + children
                .iter()
                .map(|c| count_ids_with_suffix(c, suffix))
                .sum::<usize>()
        }
        _ => own,
    }
}

// ============================================================================
// Panel rendering
// ============================================================================

#[test]
fn test_header_id_roundtrip() {
    assert_eq!(panel_key(&header_id("starch-test")), Some("starch-test"));
    assert_eq!(panel_key("footer"), None);
}

#[test]
fn test_collapsed_panel_has_no_body() {
    let rec = record("starch-test").unwrap();

    let collapsed = panel(rec, false);
    assert!(find_element(&collapsed, "panel-starch-test-body").is_none());
    assert!(find_element(&collapsed, &header_id("starch-test")).is_some());

    let expanded = panel(rec, true);
    assert!(find_element(&expanded, "panel-starch-test-body").is_some());
}

#[test]
fn test_chevron_reflects_flag() {
    let rec = record("starch-test").unwrap();

    assert!(texts(&panel(rec, false)).contains(&"▼"));
    assert!(texts(&panel(rec, true)).contains(&"▲"));
}

#[test]
fn test_header_is_the_only_clickable_element() {
    fn clickable_ids(el: &Element, out: &mut Vec<String>) {
        if el.clickable {
            out.push(el.id.clone());
        }
        if let Content::Children(children) = &el.content {
            for child in children {
                clickable_ids(child, out);
            }
        }
    }

    let rec = record("fat-test").unwrap();
    let mut ids = Vec::new();
    clickable_ids(&panel(rec, true), &mut ids);
    assert_eq!(ids, vec![header_id("fat-test")]);
}

#[test]
fn test_record_without_image_renders_no_image_block() {
    let rec = record("reducing-sugars").unwrap();
    let el = panel(rec, true);
    assert_eq!(count_ids_with_suffix(&el, "-image"), 0);
}

#[test]
fn test_record_with_image_renders_one_image_block_with_caption() {
    let rec = record("sprite-ingredients-full").unwrap();
    let el = panel(rec, true);

    assert_eq!(count_ids_with_suffix(&el, "-image"), 1);
    assert!(texts(&el).contains(&"A phenylalanine molecule"));
}

#[test]
fn test_image_block_precedes_description() {
    let rec = record("sprite-ingredients-full").unwrap();
    let el = panel(rec, true);
    let body = find_element(&el, "panel-sprite-ingredients-full-body").unwrap();

    let Content::Children(children) = &body.content else {
        panic!("body has children");
    };
    assert_eq!(children[0].id, "panel-sprite-ingredients-full-image");
}

// ============================================================================
// End-to-end: click a header, watch exactly one flag flip
// ============================================================================

#[test]
fn test_click_toggles_exactly_one_panel() {
    let mut app = App::new();
    let viewport = Rect::from_size(100, 50);

    // First activation: expand.
    let root = view::page(records(), app.state(), app.scroll());
    let lay = layout(&root, viewport);
    let header = *lay.get(&header_id("starch-test")).expect("header laid out");
    let (x, y) = (header.x + header.width / 2, header.y);

    let target = hit_test(&lay, &root, x, y);
    assert_eq!(target.as_deref(), Some(header_id("starch-test").as_str()));

    app.handle_event(
        &Event::Click {
            target,
            x,
            y,
            button: MouseButton::Left,
        },
        0,
    );

    assert!(app.state().is_expanded("starch-test"));
    assert_eq!(app.state().keys().collect::<Vec<_>>(), vec!["starch-test"]);

    // Second activation: collapse again; still no other key recorded.
    let root = view::page(records(), app.state(), app.scroll());
    let lay = layout(&root, viewport);
    let header = *lay.get(&header_id("starch-test")).expect("header laid out");
    let (x, y) = (header.x + header.width / 2, header.y);
    let target = hit_test(&lay, &root, x, y);
    assert_eq!(target.as_deref(), Some(header_id("starch-test").as_str()));

    app.handle_event(
        &Event::Click {
            target,
            x,
            y,
            button: MouseButton::Left,
        },
        0,
    );

    assert!(!app.state().is_expanded("starch-test"));
    assert_eq!(app.state().keys().collect::<Vec<_>>(), vec!["starch-test"]);
}

#[test]
fn test_click_on_footer_changes_nothing() {
    let mut app = App::new();
    app.handle_event(
        &Event::Click {
            target: Some("footer".to_string()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        },
        0,
    );
    assert_eq!(app.state().keys().count(), 0);
}

#[test]
fn test_page_renders_every_panel_header() {
    let state = PanelState::new();
    let root = view::page(records(), &state, 0);

    for rec in records() {
        assert!(
            find_element(&root, &header_id(rec.key)).is_some(),
            "missing header for {}",
            rec.key
        );
    }
}
