use std::num::NonZeroUsize;

use crate::{
    domain::labels,
    presentation::PopupRender,
    state::ITEMS_PER_PAGE_CHOICES,
};

/// Chooser for the items-per-page setting.
pub(crate) struct PopupState {
    title: String,
    options: Vec<String>,
    values: Vec<NonZeroUsize>,
    selected: usize,
}

impl PopupState {
    pub(crate) fn items_per_page(current: NonZeroUsize) -> Self {
        let mut values: Vec<NonZeroUsize> = ITEMS_PER_PAGE_CHOICES
            .iter()
            .filter_map(|choice| NonZeroUsize::new(*choice))
            .collect();
        if !values.contains(&current) {
            values.push(current);
            values.sort_unstable();
        }
        let selected = values.iter().position(|value| *value == current).unwrap_or(0);
        Self {
            title: labels::SETTING_ITEMS_PER_PAGE.to_string(),
            options: values.iter().map(ToString::to_string).collect(),
            values,
            selected,
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub(crate) fn value(&self) -> Option<NonZeroUsize> {
        self.values.get(self.selected).copied()
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn opens_on_the_current_value() {
        let popup = PopupState::items_per_page(n(10));
        assert_eq!(popup.value(), Some(n(10)));
    }

    #[test]
    fn custom_value_is_offered_in_order() {
        let mut popup = PopupState::items_per_page(n(7));
        assert_eq!(popup.value(), Some(n(7)));
        popup.select_previous();
        assert_eq!(popup.value(), Some(n(6)));
        popup.select_next();
        popup.select_next();
        assert_eq!(popup.value(), Some(n(8)));
    }

    #[test]
    fn selection_wraps() {
        let mut popup = PopupState::items_per_page(n(4));
        popup.select_previous();
        assert_eq!(popup.value(), Some(n(20)));
        popup.select_next();
        assert_eq!(popup.value(), Some(n(4)));
    }
}
