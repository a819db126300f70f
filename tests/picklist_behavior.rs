//! End-to-end behavior of the picklist app, driven through the widget tree
//! with synthetic input and rendered into a GPU-free frame.

use picklist::model::ItemId;
use picklist::{Message, PicklistApp, PicklistConfig};
use picklist_ui::{ApplicationState, Event, KeyCode, KeyModifiers, TextInputState};

const WIDTH: f32 = 480.0;
const HEIGHT: f32 = 480.0;

// Page layout: 24px padding, 18px title (21.6px line), 12px spacing
const TRIGGER: (f32, f32) = (100.0, 75.0);
// Popup children: search at y 105.6, toggle at y 140.4, list from y 175.2
const SEARCH: (f32, f32) = (100.0, 118.0);
const TOGGLE_BUTTON: (f32, f32) = (100.0, 150.0);
const FIRST_ROW: (f32, f32) = (100.0, 190.0);
const SECOND_ROW: (f32, f32) = (100.0, 226.0);
const OUTSIDE: (f32, f32) = (460.0, 460.0);

fn state_with(dataset_size: usize) -> ApplicationState<PicklistApp> {
    let app = PicklistApp::new(PicklistConfig {
        dataset_size,
        ..Default::default()
    });
    ApplicationState::new(app, WIDTH, HEIGHT)
}

fn opened(dataset_size: usize) -> ApplicationState<PicklistApp> {
    let mut state = state_with(dataset_size);
    state.click(TRIGGER);
    assert!(state.app().is_open());
    state
}

/// Row labels present in the rendered frame
fn drawn_rows(state: &ApplicationState<PicklistApp>) -> Vec<String> {
    state
        .render_view()
        .texts()
        .into_iter()
        .filter(|t| t.starts_with("Item "))
        .map(str::to_string)
        .collect()
}

#[test]
fn closed_control_shows_placeholder() {
    let state = state_with(1000);
    let frame = state.render_view();
    assert!(frame.contains_text("Select items"));
    assert!(frame.overlay_commands().is_empty());
    assert!(drawn_rows(&state).is_empty());
}

#[test]
fn trigger_opens_popup_with_focused_search() {
    let state = opened(1000);
    assert!(state.app().search_state().is_focused);

    let frame = state.render_view();
    assert!(frame.contains_text("Search..."));
    assert!(frame.contains_text("Select all"));
    assert!(!frame.overlay_commands().is_empty());
}

#[test]
fn typing_filters_the_list() {
    let mut state = opened(100_000);
    state.type_text("23");

    assert_eq!(state.app().query(), "23");
    let ids: Vec<u32> = state.app().filtered().ids().take(4).map(|id| id.0).collect();
    assert_eq!(ids, vec![23, 123, 223, 230]);
    assert!(state.app().filtered().ids().any(|id| id.0 == 23000));

    let rows = drawn_rows(&state);
    assert_eq!(&rows[..3], &["Item 23", "Item 123", "Item 223"]);
}

#[test]
fn search_is_case_insensitive() {
    let mut state = opened(200);
    state.type_text("ITEM 19");
    let labels: Vec<&str> = state
        .app()
        .filtered()
        .iter()
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(labels.len(), 11);
    assert_eq!(labels[0], "Item 19");
    assert_eq!(labels[10], "Item 199");
}

#[test]
fn clicking_rows_toggles_and_keeps_popup_open() {
    let mut state = opened(1000);
    state.click(FIRST_ROW);
    state.click(SECOND_ROW);
    assert!(state.app().is_open());
    assert!(state.app().selection().contains(ItemId(0)));
    assert!(state.app().selection().contains(ItemId(1)));

    state.click(FIRST_ROW);
    assert!(!state.app().selection().contains(ItemId(0)));
    assert_eq!(state.app().trigger_label(), "1 selected");
}

#[test]
fn select_all_then_none_over_full_dataset() {
    let mut state = opened(100_000);
    state.click(TOGGLE_BUTTON);
    assert_eq!(state.app().selection().len(), 100_000);
    assert_eq!(state.app().trigger_label(), "100000 selected");
    assert!(state.render_view().contains_text("Select none"));

    state.click(TOGGLE_BUTTON);
    assert!(state.app().selection().is_empty());
    assert_eq!(state.app().trigger_label(), "Select items");
}

#[test]
fn selection_survives_query_changes() {
    let mut state = opened(1000);
    state.click(FIRST_ROW);
    // The row click blurred the search field
    state.click(SEARCH);
    state.type_text("99");
    assert!(state.app().selection().contains(ItemId(0)));
    assert!(!state.app().filtered().contains_id(ItemId(0)));

    state.press_key(KeyCode::Escape);
    assert!(!state.app().is_open());
    assert!(state.render_view().contains_text("1 selected"));
}

#[test]
fn select_all_replaces_with_filtered_view() {
    let mut state = opened(1000);
    state.click(FIRST_ROW);
    state.click(SEARCH);
    state.type_text("5");
    let shown = state.app().filtered().len();

    state.click(TOGGLE_BUTTON);
    assert_eq!(state.app().selection().len(), shown);
    assert!(!state.app().selection().contains(ItemId(0)));
}

#[test]
fn rendered_rows_are_bounded_by_window() {
    for size in [100, 10_000, 100_000] {
        let state = opened(size);
        assert_eq!(state.app().materialized_rows().len(), 12);
        assert_eq!(drawn_rows(&state).len(), 7);
    }
}

#[test]
fn scrolling_moves_the_window() {
    let mut state = opened(100_000);
    for _ in 0..10 {
        state.process_event(&Event::MouseScroll {
            delta: (0.0, -3.0),
            position: FIRST_ROW,
            modifiers: KeyModifiers::default(),
        });
    }
    assert_eq!(state.app().list_state().scroll_offset, 600.0);

    // Offset 600 shows rows 16..23 and materializes 11..29
    let rows = state.app().materialized_rows();
    assert_eq!(rows.len(), 18);
    assert_eq!(rows[0].label, "Item 11");
    assert_eq!(drawn_rows(&state).first().map(String::as_str), Some("Item 16"));
}

#[test]
fn typing_resets_scroll_to_top() {
    let mut state = opened(100_000);
    state.process_event(&Event::MouseScroll {
        delta: (0.0, -30.0),
        position: FIRST_ROW,
        modifiers: KeyModifiers::default(),
    });
    assert!(state.app().list_state().scroll_offset > 0.0);

    state.type_text("7");
    assert_eq!(state.app().list_state().scroll_offset, 0.0);
}

#[test]
fn keyboard_navigation_toggles_active_row() {
    let mut state = opened(1000);
    state.press_key(KeyCode::Down);
    state.press_key(KeyCode::Down);
    assert_eq!(state.app().list_state().active, Some(1));

    state.press_key(KeyCode::Enter);
    assert!(state.app().selection().contains(ItemId(1)));
    assert!(state.app().is_open());
}

#[test]
fn outside_click_and_focus_loss_close() {
    let mut state = opened(100);
    state.click(OUTSIDE);
    assert!(!state.app().is_open());
    assert!(!state.app().search_state().is_focused);

    state.click(TRIGGER);
    assert!(state.app().is_open());
    state.process_event(&Event::FocusLost);
    assert!(!state.app().is_open());
}

#[test]
fn trigger_click_toggles_closed() {
    let mut state = opened(100);
    state.click(TRIGGER);
    assert!(!state.app().is_open());
}

#[test]
fn empty_dataset_renders_no_rows() {
    let mut state = opened(0);
    assert!(state.app().filtered().is_empty());
    assert!(drawn_rows(&state).is_empty());
    // Empty selection equals the empty view
    assert!(state.render_view().contains_text("Select none"));
    state.send(Message::ToggleAll);
    assert!(state.app().selection().is_empty());
}

#[test]
fn reopening_restores_cursor_at_query_end() {
    let mut state = opened(100);
    state.type_text("42");
    state.press_key(KeyCode::Escape);
    state.send(Message::Open);
    assert_eq!(state.app().query(), "42");
    assert_eq!(*state.app().search_state(), TextInputState::focused_at(2));
}
