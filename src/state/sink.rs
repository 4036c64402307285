use indexmap::IndexMap;

use crate::{
    domain::{Entry, EntryId, RenderableGuide},
    settings::Preferences,
};

use super::{Pagination, ViewMode};

/// Display fields of one rendered list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemModel {
    pub id: EntryId,
    pub label: String,
    pub star: String,
    pub species: String,
    pub color: String,
    pub image: Option<String>,
}

impl ListItemModel {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            label: entry.list_label(),
            star: entry.star.to_string(),
            species: entry.species_label().to_string(),
            color: entry.color_code().to_string(),
            image: entry.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModel {
    pub mode: ViewMode,
    pub items: Vec<ListItemModel>,
    pub image_mode: bool,
    pub thick_border: bool,
}

impl ListModel {
    /// Rendered ids in display order.
    pub fn ids(&self) -> Vec<EntryId> {
        self.items.iter().map(|item| item.id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasicInfoPanel {
    Entry { rows: IndexMap<&'static str, String> },
    NoEntries,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    Entry {
        title: String,
        guide: RenderableGuide,
    },
    NoEntries,
    Invalid,
}

/// Capability implemented by the presentation layer. The core pushes state
/// through it and never reads presentation state back.
pub trait RenderSink {
    fn render_loading(&mut self);
    fn render_load_failure(&mut self, message: &str);
    fn render_list(&mut self, list: ListModel);
    fn render_pagination(&mut self, pagination: Pagination);
    fn render_selection(&mut self, selected: Option<EntryId>);
    fn render_basic_info(&mut self, panel: BasicInfoPanel);
    fn render_detail(&mut self, panel: DetailPanel);
    fn render_theme(&mut self, dark_mode: bool);
    fn render_settings(&mut self, preferences: Preferences);
}
