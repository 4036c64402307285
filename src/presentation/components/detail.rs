use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    domain::{GuideNode, Inline, InlineText, RenderableGuide, labels},
    state::{BasicInfoPanel, DetailPanel},
};

use super::super::{Screen, theme::Palette};

pub fn render_detail(frame: &mut Frame<'_>, area: Rect, screen: &Screen, palette: &Palette) {
    let rows = match &screen.basic_info {
        Some(BasicInfoPanel::Entry { rows }) => rows.len() as u16 + 2,
        _ => 3,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(rows), Constraint::Min(3)])
        .split(area);

    render_basic_info(frame, chunks[0], screen.basic_info.as_ref(), palette);
    render_guide(frame, chunks[1], screen.detail.as_ref(), palette);
}

fn panel_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {title} "), palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(false))
}

fn render_basic_info(
    frame: &mut Frame<'_>,
    area: Rect,
    panel: Option<&BasicInfoPanel>,
    palette: &Palette,
) {
    let block = panel_block(labels::BASIC_INFO_TITLE, palette);
    let lines: Vec<Line<'static>> = match panel {
        Some(BasicInfoPanel::Entry { rows }) => {
            let key_width = rows
                .keys()
                .map(|key| unicode_width::UnicodeWidthStr::width(*key))
                .max()
                .unwrap_or(0);
            rows.iter()
                .map(|(key, value)| {
                    let pad = key_width.saturating_sub(unicode_width::UnicodeWidthStr::width(*key));
                    Line::from(vec![
                        Span::styled(format!("{key}{} ", " ".repeat(pad)), palette.muted()),
                        Span::raw(value.clone()),
                    ])
                })
                .collect()
        }
        Some(BasicInfoPanel::NoEntries) => {
            vec![Line::from(Span::styled(labels::NO_ENTRIES, palette.muted()))]
        }
        Some(BasicInfoPanel::Invalid) => vec![Line::from(Span::styled(
            labels::INVALID_SELECTION,
            Style::default().fg(palette.error),
        ))],
        None => vec![Line::from(Span::styled(labels::LOADING, palette.muted()))],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_guide(frame: &mut Frame<'_>, area: Rect, panel: Option<&DetailPanel>, palette: &Palette) {
    let (title, lines) = match panel {
        Some(DetailPanel::Entry { title, guide }) => (title.as_str(), guide_lines(guide, palette)),
        Some(DetailPanel::NoEntries) => (
            labels::DETAIL_TITLE,
            vec![Line::from(Span::styled(labels::NO_ENTRIES, palette.muted()))],
        ),
        Some(DetailPanel::Invalid) => (
            labels::DETAIL_TITLE,
            vec![Line::from(Span::styled(
                labels::INVALID_SELECTION,
                Style::default().fg(palette.error),
            ))],
        ),
        None => (labels::DETAIL_TITLE, Vec::new()),
    };
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel_block(title, palette));
    frame.render_widget(widget, area);
}

pub(crate) fn guide_lines(guide: &RenderableGuide, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for node in &guide.nodes {
        match node {
            GuideNode::Block(block) => {
                lines.push(Line::from(Span::styled(block.title.clone(), palette.title())));
                for item in &block.items {
                    let mut spans = vec![Span::styled("  • ", palette.muted())];
                    spans.extend(inline_spans(item, palette));
                    lines.push(Line::from(spans));
                }
            }
            GuideNode::Paragraph { text } => lines.push(Line::from(inline_spans(text, palette))),
            GuideNode::Pending => lines.push(Line::from(Span::styled(
                GuideNode::pending_text(),
                palette.muted().add_modifier(Modifier::ITALIC),
            ))),
        }
    }
    lines
}

fn inline_spans(text: &InlineText, palette: &Palette) -> Vec<Span<'static>> {
    text.spans
        .iter()
        .map(|span| match span {
            Inline::Plain(text) => Span::raw(text.clone()),
            Inline::Emphasis(text) => Span::styled(
                text.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
        })
        .collect()
}
