use ratatui::{
    Frame,
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::super::{theme::Palette, view::PopupRender};
use super::layout::popup_rect;

pub fn render_popup(frame: &mut Frame<'_>, popup: PopupRender<'_>, palette: &Palette) {
    if popup.options.is_empty() {
        return;
    }
    let widest = popup
        .options
        .iter()
        .map(|option| option.width())
        .chain(std::iter::once(popup.title.width()))
        .max()
        .unwrap_or(10) as u16;
    let width_limit = frame.area().width.saturating_sub(2).max(1);
    let width = widest.saturating_add(6).min(width_limit);
    let height = popup
        .options
        .len()
        .saturating_add(2)
        .min(frame.area().height as usize) as u16;
    let area = popup_rect(frame.area(), width, height.max(3));
    frame.render_widget(Clear, area);

    let items: Vec<ListItem<'static>> = popup
        .options
        .iter()
        .map(|option| ListItem::new(option.clone()))
        .collect();
    let mut state = ListState::default();
    state.select(Some(popup.selected.min(popup.options.len() - 1)));

    let list = List::new(items)
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(popup.title.to_string(), palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .highlight_style(palette.selected())
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut state);
}
