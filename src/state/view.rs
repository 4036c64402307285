use std::num::NonZeroUsize;

use crate::{
    domain::{Entry, labels},
    settings::{Preferences, Settings},
};

/// Page sizes offered by the chooser and the step actions.
pub const ITEMS_PER_PAGE_CHOICES: [usize; 8] = [4, 5, 6, 8, 10, 12, 16, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Whole catalog at once; pagination is ignored.
    #[default]
    Card,
    /// Fixed-size window navigated page by page.
    Paginated,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Card => "card",
            ViewMode::Paginated => "paginated",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "card" => Some(ViewMode::Card),
            "paginated" => Some(ViewMode::Paginated),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            ViewMode::Card => ViewMode::Paginated,
            ViewMode::Paginated => ViewMode::Card,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Card => labels::VIEW_MODE_CARD,
            ViewMode::Paginated => labels::VIEW_MODE_PAGINATED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    DarkMode,
    ImageMode,
    ThickBorder,
}

impl Toggle {
    pub const ALL: [Toggle; 3] = [Toggle::DarkMode, Toggle::ImageMode, Toggle::ThickBorder];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::DarkMode => labels::SETTING_DARK_MODE,
            Toggle::ImageMode => labels::SETTING_IMAGE_MODE,
            Toggle::ThickBorder => labels::SETTING_THICK_BORDER,
        }
    }
}

/// How much of the screen a state change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    /// Nothing changed.
    None,
    /// Only the global theme.
    Theme,
    /// Per-item markup changed; the visible slice is the same.
    Items,
    /// The visible slice changed; selection restarts at its first entry.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub visible: bool,
}

/// Display mode, windowing and feature toggles, backed by persisted settings.
#[derive(Debug)]
pub struct ViewState {
    settings: Settings,
    prefs: Preferences,
    current_page: usize,
    catalog_len: usize,
}

impl ViewState {
    /// Build the view from persisted preferences. Settings are read only here.
    pub fn new(settings: Settings) -> Self {
        let prefs = settings.load();
        Self {
            settings,
            prefs,
            current_page: 1,
            catalog_len: 0,
        }
    }

    pub fn attach_catalog(&mut self, len: usize) -> RenderScope {
        self.catalog_len = len;
        self.current_page = 1;
        RenderScope::List
    }

    pub fn mode(&self) -> ViewMode {
        self.prefs.view_mode
    }

    pub fn items_per_page(&self) -> NonZeroUsize {
        self.prefs.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(catalog / items_per_page)`; zero for an empty catalog.
    pub fn total_pages(&self) -> usize {
        self.catalog_len.div_ceil(self.prefs.items_per_page.get())
    }

    pub fn toggle(&self, toggle: Toggle) -> bool {
        self.prefs.toggle(toggle)
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> RenderScope {
        if self.prefs.view_mode == mode {
            return RenderScope::None;
        }
        self.prefs.view_mode = mode;
        self.settings.set_view_mode(mode);
        self.current_page = 1;
        RenderScope::List
    }

    pub fn cycle_view_mode(&mut self) -> RenderScope {
        self.set_view_mode(self.prefs.view_mode.other())
    }

    pub fn set_items_per_page(&mut self, items: NonZeroUsize) -> RenderScope {
        if self.prefs.items_per_page == items {
            return RenderScope::None;
        }
        self.prefs.items_per_page = items;
        self.settings.set_items_per_page(items);
        self.current_page = 1;
        RenderScope::List
    }

    /// Move to the neighbouring entry of [`ITEMS_PER_PAGE_CHOICES`].
    pub fn step_items_per_page(&mut self, delta: i32) -> RenderScope {
        let current = self.prefs.items_per_page.get();
        let below = ITEMS_PER_PAGE_CHOICES
            .iter()
            .filter(|&&choice| choice < current)
            .count() as i64;
        // an off-list size sits between two choices
        let base = if delta > 0 && !ITEMS_PER_PAGE_CHOICES.contains(&current) {
            below - 1
        } else {
            below
        };
        let last = ITEMS_PER_PAGE_CHOICES.len() as i64 - 1;
        let next = ITEMS_PER_PAGE_CHOICES[(base + i64::from(delta)).clamp(0, last) as usize];
        if (delta > 0 && next <= current) || (delta < 0 && next >= current) {
            return RenderScope::None;
        }
        match NonZeroUsize::new(next) {
            Some(items) => self.set_items_per_page(items),
            None => RenderScope::None,
        }
    }

    /// Move `delta` pages. Ignored in card mode and past either end.
    pub fn go_to_page(&mut self, delta: isize) -> RenderScope {
        if self.prefs.view_mode == ViewMode::Card {
            return RenderScope::None;
        }
        let Some(target) = self.current_page.checked_add_signed(delta) else {
            return RenderScope::None;
        };
        if delta == 0 || target < 1 || target > self.total_pages() {
            return RenderScope::None;
        }
        self.current_page = target;
        RenderScope::List
    }

    pub fn visible_slice<'a>(&self, entries: &'a [Entry]) -> &'a [Entry] {
        match self.prefs.view_mode {
            ViewMode::Card => entries,
            ViewMode::Paginated => {
                let per_page = self.prefs.items_per_page.get();
                let start = (self.current_page - 1).saturating_mul(per_page);
                if start >= entries.len() {
                    return &[];
                }
                let end = start.saturating_add(per_page).min(entries.len());
                &entries[start..end]
            }
        }
    }

    pub fn set_toggle(&mut self, toggle: Toggle, enabled: bool) -> RenderScope {
        if self.prefs.toggle(toggle) == enabled {
            return RenderScope::None;
        }
        match toggle {
            Toggle::DarkMode => self.prefs.dark_mode = enabled,
            Toggle::ImageMode => self.prefs.image_mode = enabled,
            Toggle::ThickBorder => self.prefs.thick_border = enabled,
        }
        self.settings.set_toggle(toggle, enabled);
        match toggle {
            Toggle::DarkMode => RenderScope::Theme,
            Toggle::ImageMode | Toggle::ThickBorder => RenderScope::Items,
        }
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> RenderScope {
        self.set_toggle(Toggle::DarkMode, enabled)
    }

    pub fn set_image_mode(&mut self, enabled: bool) -> RenderScope {
        self.set_toggle(Toggle::ImageMode, enabled)
    }

    pub fn set_thick_border(&mut self, enabled: bool) -> RenderScope {
        self.set_toggle(Toggle::ThickBorder, enabled)
    }

    pub fn pagination(&self) -> Pagination {
        let paginated = self.prefs.view_mode == ViewMode::Paginated;
        let total_pages = self.total_pages();
        Pagination {
            current_page: self.current_page,
            total_pages,
            prev_enabled: paginated && self.current_page > 1,
            next_enabled: paginated && self.current_page < total_pages,
            visible: paginated,
        }
    }
}
