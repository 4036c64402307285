use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::Pagination;

use super::super::{theme::Palette, view::UiContext};

pub fn render_footer(
    frame: &mut Frame<'_>,
    area: Rect,
    pagination: Option<Pagination>,
    ctx: &UiContext<'_>,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(palette.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(10)])
        .split(inner);

    if let Some(pagination) = pagination.filter(|pagination| pagination.visible) {
        frame.render_widget(Paragraph::new(pager_line(pagination, palette)), chunks[0]);
    }

    let mut status = ctx.status_message.to_string();
    if let Some(help) = ctx.help {
        if !status.is_empty() {
            status.push_str(" • ");
        }
        status.push_str(help);
    }
    let status_widget =
        Paragraph::new(Span::styled(status, palette.muted())).wrap(Wrap { trim: true });
    frame.render_widget(status_widget, chunks[1]);
}

pub(crate) fn pager_line(pagination: Pagination, palette: &Palette) -> Line<'static> {
    let arrow = |enabled: bool| {
        if enabled {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            palette.muted().add_modifier(Modifier::DIM)
        }
    };
    Line::from(vec![
        Span::styled("◀ ", arrow(pagination.prev_enabled)),
        Span::raw(format!("{} / {}", pagination.current_page, pagination.total_pages)),
        Span::styled(" ▶", arrow(pagination.next_enabled)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_dims_disabled_arrows() {
        let palette = Palette::light();
        let line = pager_line(
            Pagination {
                current_page: 2,
                total_pages: 2,
                prev_enabled: true,
                next_enabled: false,
                visible: true,
            },
            &palette,
        );
        assert_eq!(line.spans[1].content, "2 / 2");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::DIM));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::DIM));
    }
}
