use crate::{
    domain::EntryId,
    settings::Preferences,
    state::{BasicInfoPanel, DetailPanel, ListModel, Pagination, RenderSink},
};

/// What the list area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListArea {
    #[default]
    Loading,
    Failed(String),
    Items(ListModel),
}

/// Latest state pushed by the controller; `draw` paints it as-is.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub list: ListArea,
    pub pagination: Option<Pagination>,
    pub selected: Option<EntryId>,
    pub basic_info: Option<BasicInfoPanel>,
    pub detail: Option<DetailPanel>,
    pub dark_mode: bool,
    pub preferences: Preferences,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        match &self.list {
            ListArea::Items(list) => list.items.len(),
            ListArea::Loading | ListArea::Failed(_) => 0,
        }
    }

    /// Position of the selected item among the rendered ones.
    pub fn selected_index(&self) -> Option<usize> {
        let ListArea::Items(list) = &self.list else {
            return None;
        };
        let selected = self.selected?;
        list.items.iter().position(|item| item.id == selected)
    }
}

impl RenderSink for Screen {
    fn render_loading(&mut self) {
        self.list = ListArea::Loading;
    }

    fn render_load_failure(&mut self, message: &str) {
        self.list = ListArea::Failed(message.to_string());
    }

    fn render_list(&mut self, list: ListModel) {
        self.list = ListArea::Items(list);
    }

    fn render_pagination(&mut self, pagination: Pagination) {
        self.pagination = Some(pagination);
    }

    fn render_selection(&mut self, selected: Option<EntryId>) {
        self.selected = selected;
    }

    fn render_basic_info(&mut self, panel: BasicInfoPanel) {
        self.basic_info = Some(panel);
    }

    fn render_detail(&mut self, panel: DetailPanel) {
        self.detail = Some(panel);
    }

    fn render_theme(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    fn render_settings(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }
}
