//! Main picklist application.
//!
//! Owns the dataset, the current query and its filtered view, the selection,
//! and the UI state of the dropdown (open flag, search field, list scroll).

use picklist_ui::prelude::*;
use picklist_ui::theme::current_theme;

use crate::config::PicklistConfig;
use crate::constants::{
    PLACEHOLDER, SEARCH_PLACEHOLDER, SELECT_ALL_LABEL, SELECT_NONE_LABEL, TITLE,
};
use crate::message::Message;
use crate::model::{Dataset, FilteredView, Selection};

/// Page padding around the column
const PAGE_PADDING: f32 = 24.0;

/// Spacing between the title, the control and the status line
const PAGE_SPACING: f32 = 12.0;

pub struct PicklistApp {
    config: PicklistConfig,
    dataset: Dataset,
    filtered: FilteredView,
    selection: Selection,
    /// Whether the selection equals the filtered view, kept current by `update`
    all_selected: bool,
    is_open: bool,
    search_state: TextInputState,
    list_state: VirtualListState,
}

impl PicklistApp {
    pub fn new(config: PicklistConfig) -> Self {
        let dataset = Dataset::generate(config.dataset_size);
        let filtered = FilteredView::new(&dataset, "");
        log::info!("Picklist ready with {} items", dataset.len());
        let all_selected = filtered.is_empty();
        Self {
            config,
            dataset,
            filtered,
            selection: Selection::new(),
            all_selected,
            is_open: false,
            search_state: TextInputState::new(),
            list_state: VirtualListState::new(),
        }
    }

    pub fn config(&self) -> &PicklistConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filtered(&self) -> &FilteredView {
        &self.filtered
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn query(&self) -> &str {
        self.filtered.query()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_state(&self) -> &TextInputState {
        &self.search_state
    }

    pub fn list_state(&self) -> &VirtualListState {
        &self.list_state
    }

    /// Label of the closed trigger
    pub fn trigger_label(&self) -> String {
        self.selection.label(PLACEHOLDER)
    }

    /// Label of the select-all / select-none button
    pub fn toggle_label(&self) -> &'static str {
        if self.all_selected {
            SELECT_NONE_LABEL
        } else {
            SELECT_ALL_LABEL
        }
    }

    fn virtualizer(&self) -> Virtualizer {
        Virtualizer::new(self.filtered.len(), self.config.row_height)
            .overscan(self.config.overscan)
            .viewport_height(self.config.list_height)
    }

    /// Rows handed to the list for the current scroll position.
    pub fn materialized_rows(&self) -> Vec<ListRow> {
        let virtualizer = self.virtualizer();
        let offset = virtualizer.clamp_offset(self.list_state.scroll_offset);
        self.filtered
            .items_in(virtualizer.render_range(offset))
            .map(|(index, item)| ListRow {
                index,
                label: item.label.clone(),
                selected: self.selection.contains(item.id),
            })
            .collect()
    }

    fn set_query(&mut self, query: String) {
        if query == self.filtered.query() {
            return;
        }
        self.filtered = FilteredView::new(&self.dataset, &query);
        self.list_state.reset();
        self.refresh_all_selected();
    }

    fn refresh_all_selected(&mut self) {
        self.all_selected = self.selection.equals_view(&self.filtered);
    }

    fn status_line(&self) -> String {
        format!(
            "{} of {} items selected, {} shown",
            self.selection.len(),
            self.dataset.len(),
            self.filtered.len()
        )
    }

    fn view_select(&self) -> MultiSelect<Message> {
        let select = MultiSelect::new(self.trigger_label())
            .muted(self.selection.is_empty())
            .width(self.config.control_width)
            .open(self.is_open)
            .on_open(|| Message::Open)
            .on_close(|| Message::Close);

        if !self.is_open {
            return select;
        }

        select
            .search(
                TextInput::new()
                    .value(self.query())
                    .placeholder(SEARCH_PLACEHOLDER)
                    .state(&self.search_state)
                    .width(Length::Fill)
                    .on_change(Message::QueryChanged),
            )
            .toggle(
                Button::new(self.toggle_label())
                    .style(ButtonStyle::Text)
                    .text_align(Alignment::Start)
                    .width(Length::Fill)
                    .on_click(|| Message::ToggleAll),
            )
            .list(
                VirtualList::new(self.virtualizer(), &self.list_state)
                    .rows(self.materialized_rows())
                    .on_toggle(Message::Toggle)
                    .on_scroll(Message::ListChanged),
            )
    }
}

impl Application for PicklistApp {
    type Message = Message;

    fn title(&self) -> String {
        TITLE.to_string()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Open => {
                log::debug!("Dropdown opened");
                self.is_open = true;
                self.list_state.reset();
                self.search_state = TextInputState::focused_at(self.query().chars().count());
            }
            Message::Close => {
                log::debug!("Dropdown closed");
                self.is_open = false;
                self.search_state.blur();
            }
            Message::QueryChanged(query, state) => {
                self.search_state = state;
                self.set_query(query);
            }
            Message::Toggle(position) => match self.filtered.get(position) {
                Some(item) => {
                    let id = item.id;
                    let selected = self.selection.toggle(id);
                    log::debug!("Item {} {}", id, if selected { "selected" } else { "deselected" });
                    self.refresh_all_selected();
                }
                None => log::warn!("Toggle for row {} outside the filtered view", position),
            },
            Message::ToggleAll => {
                self.selection.toggle_all(&self.filtered);
                self.refresh_all_selected();
                log::debug!("Select all toggled: {} selected", self.selection.len());
            }
            Message::ListChanged(state) => {
                log::trace!("List state: {:?}", state);
                self.list_state = state;
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let theme = current_theme();
        Column::new()
            .padding(PAGE_PADDING)
            .spacing(PAGE_SPACING)
            .push(Text::new(TITLE).size(picklist_ui::constants::TITLE_FONT_SIZE))
            .push(self.view_select())
            .push(Text::new(self.status_line()).color(theme.text_secondary))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn app(size: usize) -> PicklistApp {
        PicklistApp::new(PicklistConfig {
            dataset_size: size,
            ..Default::default()
        })
    }

    #[test]
    fn test_open_focuses_search_at_end() {
        let mut app = app(100);
        app.update(Message::QueryChanged("12".into(), TextInputState::new()));
        app.update(Message::Open);
        assert!(app.is_open());
        assert!(app.search_state().is_focused);
        assert_eq!(app.search_state().cursor, 2);

        app.update(Message::Close);
        assert!(!app.is_open());
        assert!(!app.search_state().is_focused);
    }

    #[test]
    fn test_query_resets_scroll() {
        let mut app = app(1000);
        let mut scrolled = VirtualListState::new();
        scrolled.scroll_offset = 720.0;
        scrolled.active = Some(22);
        app.update(Message::ListChanged(scrolled));
        assert_eq!(app.list_state().scroll_offset, 720.0);

        app.update(Message::QueryChanged("9".into(), TextInputState::focused_at(1)));
        assert_eq!(app.list_state().scroll_offset, 0.0);
        assert_eq!(app.list_state().active, None);
        assert_eq!(app.query(), "9");
    }

    #[test]
    fn test_unchanged_query_keeps_scroll() {
        let mut app = app(1000);
        let mut scrolled = VirtualListState::new();
        scrolled.scroll_offset = 360.0;
        app.update(Message::ListChanged(scrolled));
        app.update(Message::QueryChanged(String::new(), TextInputState::focused_at(0)));
        assert_eq!(app.list_state().scroll_offset, 360.0);
    }

    #[test]
    fn test_toggle_uses_view_position() {
        let mut app = app(100);
        app.update(Message::QueryChanged("7".into(), TextInputState::new()));
        // Position 1 of "7" is Item 17
        app.update(Message::Toggle(1));
        assert!(app.selection().contains(ItemId(17)));
        app.update(Message::Toggle(99));
        assert_eq!(app.selection().len(), 1);
    }

    #[test]
    fn test_toggle_label_follows_selection() {
        let mut app = app(10);
        assert_eq!(app.toggle_label(), "Select all");
        app.update(Message::ToggleAll);
        assert_eq!(app.toggle_label(), "Select none");
        assert_eq!(app.trigger_label(), "10 selected");
        app.update(Message::ToggleAll);
        assert_eq!(app.trigger_label(), "Select items");
    }

    #[test]
    fn test_toggle_label_tracks_every_change() {
        let mut app = app(30);
        let expect_label = |app: &PicklistApp| {
            let expected = if app.selection().equals_view(app.filtered()) {
                "Select none"
            } else {
                "Select all"
            };
            assert_eq!(app.toggle_label(), expected);
        };

        app.update(Message::QueryChanged("2".into(), TextInputState::new()));
        expect_label(&app);
        // "2" over 0..30 is Item 2, 12, 20..=29
        for position in 0..app.filtered().len() {
            app.update(Message::Toggle(position));
            expect_label(&app);
        }
        assert_eq!(app.toggle_label(), "Select none");

        app.update(Message::QueryChanged("1".into(), TextInputState::new()));
        expect_label(&app);
        assert_eq!(app.toggle_label(), "Select all");

        app.update(Message::QueryChanged("nothing".into(), TextInputState::new()));
        expect_label(&app);
        app.update(Message::ListChanged(VirtualListState::new()));
        expect_label(&app);
    }

    #[test]
    fn test_materialized_rows_window() {
        let app = app(100_000);
        let rows = app.materialized_rows();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].label, "Item 0");
    }

    #[test]
    fn test_status_line() {
        let mut app = app(50);
        app.update(Message::Toggle(3));
        assert_eq!(app.status_line(), "1 of 50 items selected, 50 shown");
    }
}
