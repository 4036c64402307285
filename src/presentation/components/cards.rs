use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{ListItemModel, ListModel};

use super::super::{theme::Palette, view::HitMap};
use super::layout::{grid_cell, grid_columns};

const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 4;
const CARD_HEIGHT_WITH_IMAGE: u16 = 5;

pub fn render_cards(
    frame: &mut Frame<'_>,
    area: Rect,
    list: &ListModel,
    selected: Option<usize>,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let height = if list.image_mode { CARD_HEIGHT_WITH_IMAGE } else { CARD_HEIGHT };
    let columns = grid_columns(area.width, CARD_WIDTH);
    let visible_rows = (area.height / height) as usize;
    let rows = list.items.len().div_ceil(columns);
    let selected_row = selected.map(|index| index / columns);
    let first_row = super::list::scroll_offset(selected_row, visible_rows, rows);

    for (index, item) in list.items.iter().enumerate() {
        let Some(rect) = grid_cell(area, index, columns, (CARD_WIDTH, height), first_row) else {
            continue;
        };
        let is_selected = selected == Some(index);
        render_card(frame, rect, item, list, is_selected, palette);
        hits.push(rect, item.id);
    }
}

fn render_card(
    frame: &mut Frame<'_>,
    area: Rect,
    item: &ListItemModel,
    list: &ListModel,
    is_selected: bool,
    palette: &Palette,
) {
    let color = palette.entry_color(&item.color);
    let border_type = if list.thick_border { BorderType::Thick } else { BorderType::Plain };
    let border_style = if is_selected {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner_width = area.width.saturating_sub(2).max(1) as usize;

    let mut lines = Vec::with_capacity(3);
    if list.image_mode {
        let caption = item.image.as_deref().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled("▇▇▇ ", Style::default().fg(color)),
            Span::styled(caption.to_string(), palette.muted()),
        ]));
    }
    let label = textwrap::wrap(&item.label, inner_width)
        .into_iter()
        .next()
        .map(|line| line.into_owned())
        .unwrap_or_default();
    lines.push(Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(item.star.clone(), Style::default().fg(palette.accent)),
        Span::raw(" "),
        Span::styled(item.species.clone(), palette.muted()),
    ]));

    let style = if is_selected { palette.selected() } else { palette.base() };
    frame.render_widget(Paragraph::new(lines).style(style).block(block), area);
}
