use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::Block,
};

use crate::{
    domain::{EntryId, labels},
    state::Toggle,
};

use super::{
    Screen,
    components::{
        render_detail, render_footer, render_list_area, render_popup, render_settings, render_tabs,
    },
    theme::Palette,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Guide,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Guide, Tab::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Guide => labels::TAB_GUIDE,
            Tab::Settings => labels::TAB_SETTINGS,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Guide => 0,
            Tab::Settings => 1,
        }
    }

    pub fn step(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let index = (self.index() as i32 + delta).rem_euclid(len);
        Self::ALL[index as usize]
    }
}

/// Rows of the settings panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    ViewMode,
    ItemsPerPage,
    Toggle(Toggle),
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 5] = [
        SettingsRow::ViewMode,
        SettingsRow::ItemsPerPage,
        SettingsRow::Toggle(Toggle::DarkMode),
        SettingsRow::Toggle(Toggle::ImageMode),
        SettingsRow::Toggle(Toggle::ThickBorder),
    ];

    pub fn at(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub tab: Tab,
    pub settings_cursor: usize,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
}

/// Screen rectangles of the items drawn in the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    items: Vec<(Rect, EntryId)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, id: EntryId) {
        self.items.push((area, id));
    }

    pub fn item_at(&self, column: u16, row: u16) -> Option<EntryId> {
        let position = Position::new(column, row);
        self.items
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, id)| *id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn draw(frame: &mut Frame<'_>, screen: &Screen, ctx: UiContext<'_>) -> HitMap {
    let palette = Palette::for_mode(screen.dark_mode);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], ctx.tab, ctx.title, &palette);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let hits = render_list_area(frame, body[0], screen, &palette);
    match ctx.tab {
        Tab::Guide => render_detail(frame, body[1], screen, &palette),
        Tab::Settings => render_settings(
            frame,
            body[1],
            &screen.preferences,
            ctx.settings_cursor,
            &palette,
        ),
    }

    render_footer(frame, chunks[2], screen.pagination, &ctx, &palette);

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup, &palette);
    }
    hits
}
