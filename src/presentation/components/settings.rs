use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{domain::labels, settings::Preferences};

use super::super::{theme::Palette, view::SettingsRow};

pub fn render_settings(
    frame: &mut Frame<'_>,
    area: Rect,
    preferences: &Preferences,
    cursor: usize,
    palette: &Palette,
) {
    let items: Vec<ListItem<'static>> = SettingsRow::ALL
        .iter()
        .map(|row| {
            let (label, value) = row_text(*row, preferences);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{label}: ")),
                Span::styled(value, Style::default().fg(palette.accent)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(cursor.min(SettingsRow::ALL.len() - 1)));

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", labels::TAB_SETTINGS), palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .highlight_style(palette.selected().add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

pub(crate) fn row_text(row: SettingsRow, preferences: &Preferences) -> (&'static str, String) {
    match row {
        SettingsRow::ViewMode => (
            labels::SETTING_VIEW_MODE,
            format!("◀ {} ▶", preferences.view_mode.label()),
        ),
        SettingsRow::ItemsPerPage => (
            labels::SETTING_ITEMS_PER_PAGE,
            format!("◀ {} ▶", preferences.items_per_page),
        ),
        SettingsRow::Toggle(toggle) => {
            let mark = if preferences.toggle(toggle) { "[x]" } else { "[ ]" };
            (toggle.label(), mark.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Toggle;

    #[test]
    fn rows_reflect_preferences() {
        let mut prefs = Preferences::default();
        prefs.image_mode = true;
        assert_eq!(
            row_text(SettingsRow::ItemsPerPage, &prefs),
            (labels::SETTING_ITEMS_PER_PAGE, "◀ 8 ▶".to_string())
        );
        assert_eq!(
            row_text(SettingsRow::Toggle(Toggle::ImageMode), &prefs).1,
            "[x]"
        );
        assert_eq!(
            row_text(SettingsRow::Toggle(Toggle::DarkMode), &prefs).1,
            "[ ]"
        );
    }
}
