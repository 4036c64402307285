use std::{collections::HashMap, num::NonZeroUsize};

use crate::{
    catalog::{CatalogStore, LoadError},
    domain::{EntryId, RenderableGuide, parse_guide},
};

use super::{
    BasicInfoPanel, DetailPanel, ListItemModel, ListModel, RenderScope, RenderSink,
    SelectionController, SelectionOutcome, Toggle, ViewMode, ViewState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed(String),
}

/// Owns the catalog, view and selection and keeps the sink in step with them.
///
/// Every mutating call finishes its rendering before it returns, so the sink
/// never shows a state older than the last applied change.
#[derive(Debug)]
pub struct BrowserController {
    catalog: CatalogStore,
    view: ViewState,
    selection: SelectionController,
    load_state: LoadState,
    rendered: Vec<EntryId>,
    guides: HashMap<EntryId, RenderableGuide>,
}

impl BrowserController {
    pub fn new(view: ViewState) -> Self {
        Self {
            catalog: CatalogStore::default(),
            view,
            selection: SelectionController::new(),
            load_state: LoadState::Pending,
            rendered: Vec::new(),
            guides: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn selected(&self) -> Option<EntryId> {
        self.selection.selected()
    }

    pub fn rendered(&self) -> &[EntryId] {
        &self.rendered
    }

    /// First paint, before the catalog arrives.
    pub fn start(&mut self, sink: &mut dyn RenderSink) {
        sink.render_theme(self.view.toggle(Toggle::DarkMode));
        sink.render_settings(self.view.preferences());
        sink.render_pagination(self.view.pagination());
        match &self.load_state {
            LoadState::Pending => sink.render_loading(),
            LoadState::Failed(message) => sink.render_load_failure(message),
            LoadState::Ready => self.render_list(sink, true),
        }
    }

    /// Install the single catalog load result. Returns `false` if a result was
    /// already installed.
    pub fn on_loaded(
        &mut self,
        result: Result<CatalogStore, LoadError>,
        sink: &mut dyn RenderSink,
    ) -> bool {
        if self.load_state != LoadState::Pending {
            tracing::warn!("catalog already loaded; ignoring another load result");
            return false;
        }
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.load_state = LoadState::Ready;
                let scope = self.view.attach_catalog(self.catalog.len());
                self.apply(scope, sink);
            }
            Err(err) => {
                let message = err.message();
                tracing::error!("catalog load failed: {message}");
                self.load_state = LoadState::Failed(message.clone());
                self.selection.clear();
                self.rendered.clear();
                sink.render_load_failure(&message);
                sink.render_pagination(self.view.pagination());
                sink.render_selection(None);
            }
        }
        true
    }

    pub fn set_view_mode(&mut self, mode: ViewMode, sink: &mut dyn RenderSink) -> RenderScope {
        let scope = self.view.set_view_mode(mode);
        self.apply(scope, sink);
        scope
    }

    pub fn cycle_view_mode(&mut self, sink: &mut dyn RenderSink) -> RenderScope {
        let scope = self.view.cycle_view_mode();
        self.apply(scope, sink);
        scope
    }

    pub fn set_items_per_page(
        &mut self,
        items: NonZeroUsize,
        sink: &mut dyn RenderSink,
    ) -> RenderScope {
        let scope = self.view.set_items_per_page(items);
        self.apply(scope, sink);
        scope
    }

    pub fn step_items_per_page(&mut self, delta: i32, sink: &mut dyn RenderSink) -> RenderScope {
        let scope = self.view.step_items_per_page(delta);
        self.apply(scope, sink);
        scope
    }

    pub fn go_to_page(&mut self, delta: isize, sink: &mut dyn RenderSink) -> RenderScope {
        let scope = self.view.go_to_page(delta);
        self.apply(scope, sink);
        scope
    }

    pub fn set_toggle(
        &mut self,
        toggle: Toggle,
        enabled: bool,
        sink: &mut dyn RenderSink,
    ) -> RenderScope {
        let scope = self.view.set_toggle(toggle, enabled);
        self.apply(scope, sink);
        scope
    }

    pub fn flip_toggle(&mut self, toggle: Toggle, sink: &mut dyn RenderSink) -> RenderScope {
        let enabled = !self.view.toggle(toggle);
        self.set_toggle(toggle, enabled, sink)
    }

    /// Explicit pick of a rendered item.
    pub fn pick(&mut self, id: EntryId, sink: &mut dyn RenderSink) -> SelectionOutcome {
        let outcome = self.selection.pick(id, &self.rendered, &self.catalog);
        if let SelectionOutcome::Invalid(id) = outcome {
            tracing::debug!(%id, "pick does not match a rendered entry");
        }
        self.show(outcome, sink);
        outcome
    }

    /// Pick the rendered item `delta` positions from the current selection.
    pub fn pick_relative(
        &mut self,
        delta: isize,
        sink: &mut dyn RenderSink,
    ) -> Option<SelectionOutcome> {
        let target = self.selection.neighbor(delta, &self.rendered)?;
        Some(self.pick(target, sink))
    }

    fn apply(&mut self, scope: RenderScope, sink: &mut dyn RenderSink) {
        match scope {
            RenderScope::None => return,
            RenderScope::Theme => sink.render_theme(self.view.toggle(Toggle::DarkMode)),
            RenderScope::Items => self.render_list(sink, false),
            RenderScope::List => self.render_list(sink, true),
        }
        sink.render_settings(self.view.preferences());
    }

    fn render_list(&mut self, sink: &mut dyn RenderSink, reselect: bool) {
        sink.render_pagination(self.view.pagination());
        if self.load_state != LoadState::Ready {
            return;
        }
        let slice = self.view.visible_slice(self.catalog.entries());
        let list = ListModel {
            mode: self.view.mode(),
            items: slice.iter().map(ListItemModel::from_entry).collect(),
            image_mode: self.view.toggle(Toggle::ImageMode),
            thick_border: self.view.toggle(Toggle::ThickBorder),
        };
        self.rendered = list.ids();
        sink.render_list(list);
        let outcome = if reselect {
            self.selection.on_rendered(&self.rendered)
        } else {
            self.selection.retain(&self.rendered)
        };
        self.show(outcome, sink);
    }

    fn show(&mut self, outcome: SelectionOutcome, sink: &mut dyn RenderSink) {
        let entry = match outcome {
            SelectionOutcome::Selected(id) => self.catalog.find_by_id(id),
            SelectionOutcome::Empty | SelectionOutcome::Invalid(_) => None,
        };
        match (outcome, entry) {
            (SelectionOutcome::Selected(id), Some(entry)) => {
                let guide = self
                    .guides
                    .entry(id)
                    .or_insert_with(|| parse_guide(&entry.detail.guide_lines))
                    .clone();
                sink.render_selection(Some(id));
                sink.render_basic_info(BasicInfoPanel::Entry {
                    rows: entry.basic_rows(),
                });
                sink.render_detail(DetailPanel::Entry {
                    title: entry.detail_title().to_string(),
                    guide,
                });
            }
            (SelectionOutcome::Empty, _) => {
                sink.render_selection(None);
                sink.render_basic_info(BasicInfoPanel::NoEntries);
                sink.render_detail(DetailPanel::NoEntries);
            }
            (SelectionOutcome::Selected(_) | SelectionOutcome::Invalid(_), _) => {
                self.selection.clear();
                sink.render_selection(None);
                sink.render_basic_info(BasicInfoPanel::Invalid);
                sink.render_detail(DetailPanel::Invalid);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Entry,
        settings::{MemorySettings, Preferences, Settings, VIEW_MODE_KEY},
        state::Pagination,
    };

    #[derive(Default)]
    struct Recorder {
        lists: Vec<Vec<EntryId>>,
        selection: Option<EntryId>,
        detail: Option<DetailPanel>,
        failure: Option<String>,
        dark: Option<bool>,
        events: Vec<&'static str>,
    }

    impl RenderSink for Recorder {
        fn render_loading(&mut self) {
            self.events.push("loading");
        }
        fn render_load_failure(&mut self, message: &str) {
            self.failure = Some(message.to_string());
        }
        fn render_list(&mut self, list: ListModel) {
            self.events.push("list");
            self.lists.push(list.ids());
        }
        fn render_pagination(&mut self, _pagination: Pagination) {}
        fn render_selection(&mut self, selected: Option<EntryId>) {
            self.selection = selected;
        }
        fn render_basic_info(&mut self, _panel: BasicInfoPanel) {}
        fn render_detail(&mut self, panel: DetailPanel) {
            self.detail = Some(panel);
        }
        fn render_theme(&mut self, dark_mode: bool) {
            self.events.push("theme");
            self.dark = Some(dark_mode);
        }
        fn render_settings(&mut self, _preferences: Preferences) {}
    }

    fn catalog(count: i64) -> CatalogStore {
        let entries = (1..=count)
            .map(|id| {
                serde_json::from_value::<Entry>(serde_json::json!({
                    "id": id,
                    "name": format!("m{id}"),
                    "detail": {"guide": [format!("Tips[tip {id}]")]}
                }))
                .unwrap()
            })
            .collect();
        CatalogStore::from_entries(entries).unwrap()
    }

    fn controller(mode: &str) -> BrowserController {
        let settings = Settings::new(MemorySettings::new().with_value(VIEW_MODE_KEY, mode));
        BrowserController::new(ViewState::new(settings))
    }

    #[test]
    fn second_load_is_ignored() {
        let mut sink = Recorder::default();
        let mut browser = controller("card");
        assert!(browser.on_loaded(Ok(catalog(3)), &mut sink));
        assert!(!browser.on_loaded(Err(LoadError::Interrupted), &mut sink));
        assert_eq!(browser.load_state(), &LoadState::Ready);
        assert!(sink.failure.is_none());
    }

    #[test]
    fn load_failure_keeps_defaults() {
        let mut sink = Recorder::default();
        let mut browser = controller("paginated");
        browser.start(&mut sink);
        browser.on_loaded(Err(LoadError::Malformed("bad".into())), &mut sink);
        assert_eq!(sink.failure.as_deref(), Some("malformed catalog: bad"));
        assert!(sink.lists.is_empty());
        assert_eq!(browser.view().total_pages(), 0);
        assert_eq!(browser.go_to_page(1, &mut sink), RenderScope::None);
        assert_eq!(sink.selection, None);
    }

    #[test]
    fn dark_mode_only_touches_the_theme() {
        let mut sink = Recorder::default();
        let mut browser = controller("card");
        browser.on_loaded(Ok(catalog(2)), &mut sink);
        sink.events.clear();
        browser.flip_toggle(Toggle::DarkMode, &mut sink);
        assert_eq!(sink.events, vec!["theme"]);
        assert_eq!(sink.dark, Some(true));
    }

    #[test]
    fn item_toggles_keep_the_picked_entry() {
        let mut sink = Recorder::default();
        let mut browser = controller("card");
        browser.on_loaded(Ok(catalog(4)), &mut sink);
        browser.pick(EntryId(3), &mut sink);
        browser.flip_toggle(Toggle::ImageMode, &mut sink);
        assert_eq!(sink.lists.len(), 2);
        assert_eq!(sink.selection, Some(EntryId(3)));
    }

    #[test]
    fn detail_panel_carries_the_parsed_guide() {
        let mut sink = Recorder::default();
        let mut browser = controller("card");
        browser.on_loaded(Ok(catalog(2)), &mut sink);
        browser.pick(EntryId(2), &mut sink);
        let Some(DetailPanel::Entry { title, guide }) = &sink.detail else {
            panic!("expected entry detail");
        };
        assert_eq!(title, "상세 정보");
        assert_eq!(guide.nodes.len(), 1);
    }

    #[test]
    fn invalid_pick_renders_invalid_state() {
        let mut sink = Recorder::default();
        let mut browser = controller("card");
        browser.on_loaded(Ok(catalog(2)), &mut sink);
        let outcome = browser.pick(EntryId(42), &mut sink);
        assert_eq!(outcome, SelectionOutcome::Invalid(EntryId(42)));
        assert_eq!(sink.selection, None);
        assert_eq!(sink.detail, Some(DetailPanel::Invalid));
    }

    #[test]
    fn empty_catalog_renders_no_entries() {
        let mut sink = Recorder::default();
        let mut browser = controller("paginated");
        browser.on_loaded(Ok(CatalogStore::default()), &mut sink);
        assert_eq!(sink.lists, vec![Vec::<EntryId>::new()]);
        assert_eq!(sink.detail, Some(DetailPanel::NoEntries));
    }
}
