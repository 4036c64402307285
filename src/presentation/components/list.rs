use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::labels,
    state::{ListItemModel, ListModel, ViewMode},
};

use super::super::{Screen, screen::ListArea, theme::Palette, view::HitMap};
use super::cards::render_cards;

const SWATCH: &str = "██";

/// Draw whatever the list area holds and return the clickable item rects.
pub fn render_list_area(
    frame: &mut Frame<'_>,
    area: Rect,
    screen: &Screen,
    palette: &Palette,
) -> HitMap {
    let mut hits = HitMap::default();
    match &screen.list {
        ListArea::Loading => {
            let block = list_block(palette, None);
            let loading = Paragraph::new(labels::LOADING).style(palette.muted()).block(block);
            frame.render_widget(loading, area);
        }
        ListArea::Failed(message) => {
            let block = list_block(palette, None);
            let failed = Paragraph::new(labels::load_failed(message))
                .style(Style::default().fg(palette.error))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(failed, area);
        }
        ListArea::Items(list) if list.items.is_empty() => {
            let block = list_block(palette, Some(list));
            let empty = Paragraph::new(labels::NO_ENTRIES).style(palette.muted()).block(block);
            frame.render_widget(empty, area);
        }
        ListArea::Items(list) => {
            let block = list_block(palette, Some(list));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let selected = screen.selected_index();
            match list.mode {
                ViewMode::Card => render_cards(frame, inner, list, selected, palette, &mut hits),
                ViewMode::Paginated => {
                    render_rows(frame, inner, list, selected, palette, &mut hits)
                }
            }
        }
    }
    hits
}

fn list_block(palette: &Palette, list: Option<&ListModel>) -> Block<'static> {
    let title = match list {
        Some(list) => format!(" {} ({}) ", list.mode.label(), list.items.len()),
        None => format!(" {} ", labels::LIST_TITLE),
    };
    let border_type = match list {
        Some(list) if list.thick_border => BorderType::Thick,
        _ => BorderType::Rounded,
    };
    Block::default()
        .title(Span::styled(title, palette.title()))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(palette.border(false))
}

/// First row to draw so that `selected` stays inside a window of `height` rows.
pub(crate) fn scroll_offset(selected: Option<usize>, height: usize, total: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let selected = selected.unwrap_or(0).min(total - 1);
    selected.saturating_sub(height - 1)
}

fn render_rows(
    frame: &mut Frame<'_>,
    area: Rect,
    list: &ListModel,
    selected: Option<usize>,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let height = area.height as usize;
    let offset = scroll_offset(selected, height, list.items.len());
    let visible = list.items.iter().enumerate().skip(offset).take(height);
    for (row, (index, item)) in visible.enumerate() {
        let rect = Rect::new(area.x, area.y + row as u16, area.width, 1);
        let is_selected = selected == Some(index);
        let line = row_line(item, list.image_mode, is_selected, rect.width as usize, palette);
        let style = if is_selected { palette.selected() } else { palette.base() };
        frame.render_widget(Paragraph::new(line).style(style), rect);
        hits.push(rect, item.id);
    }
}

fn row_line(
    item: &ListItemModel,
    image_mode: bool,
    is_selected: bool,
    width: usize,
    palette: &Palette,
) -> Line<'static> {
    let color = palette.entry_color(&item.color);
    let mut spans = Vec::with_capacity(6);
    spans.push(Span::styled(
        if is_selected { "» " } else { "  " },
        Style::default().fg(palette.accent),
    ));
    if image_mode {
        spans.push(Span::styled(SWATCH, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        item.label.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    let tail = format!("  {}  {}", item.star, item.species);
    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    if used + tail.width() <= width {
        spans.push(Span::styled(tail, palette.muted()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_selection_on_screen() {
        assert_eq!(scroll_offset(Some(2), 5, 20), 0);
        assert_eq!(scroll_offset(Some(9), 5, 20), 5);
        assert_eq!(scroll_offset(None, 5, 20), 0);
        assert_eq!(scroll_offset(Some(9), 10, 8), 0);
        assert_eq!(scroll_offset(Some(3), 0, 8), 0);
    }
}
