use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

use super::super::{theme::Palette, view::Tab};

const DEFAULT_TITLE: &str = "Bestiary";

pub fn render_tabs(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: Tab,
    title: Option<&str>,
    palette: &Palette,
) {
    let titles: Vec<Line<'static>> = Tab::ALL
        .iter()
        .map(|tab| Line::from(Span::raw(format!(" {} ", tab.title()))))
        .collect();

    let block = Block::default()
        .title(Span::styled(title.unwrap_or(DEFAULT_TITLE).to_string(), palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected.index())
        .style(palette.muted())
        .highlight_style(palette.title().add_modifier(Modifier::UNDERLINED))
        .divider("│");
    frame.render_widget(tabs, area);
}
