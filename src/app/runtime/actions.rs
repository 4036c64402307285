use crate::{
    presentation::SettingsRow,
    state::{RenderScope, Toggle, ViewMode},
};

use super::{super::input::KeyAction, App, PopupState};

impl App {
    pub(super) fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ResetStatus => self.status.ready(),
            KeyAction::SwitchTab(delta) => self.tab = self.tab.step(delta),
            KeyAction::PickStep(delta) => {
                if let Some(outcome) = self
                    .controller
                    .pick_relative(delta as isize, &mut self.screen)
                {
                    self.status.picked(outcome);
                }
            }
            KeyAction::PageStep(delta) => self.step_page(delta),
            KeyAction::CycleViewMode => self.cycle_view_mode(),
            KeyAction::ItemsPerPageStep(delta) => self.step_items_per_page(delta),
            KeyAction::OpenItemsPerPage => self.open_items_per_page(),
            KeyAction::Toggle(toggle) => {
                self.controller.flip_toggle(toggle, &mut self.screen);
                self.announce_toggle(toggle);
            }
            KeyAction::SettingsStep(delta) => {
                let len = SettingsRow::ALL.len() as i32;
                let cursor = self.settings_cursor as i32 + delta;
                self.settings_cursor = cursor.rem_euclid(len) as usize;
            }
            KeyAction::SettingsAdjust(delta) => match SettingsRow::at(self.settings_cursor) {
                SettingsRow::ViewMode => self.cycle_view_mode(),
                SettingsRow::ItemsPerPage => self.step_items_per_page(delta),
                SettingsRow::Toggle(toggle) => {
                    self.controller.set_toggle(toggle, delta > 0, &mut self.screen);
                    self.announce_toggle(toggle);
                }
            },
            KeyAction::Activate => match SettingsRow::at(self.settings_cursor) {
                SettingsRow::ViewMode => self.cycle_view_mode(),
                SettingsRow::ItemsPerPage => self.open_items_per_page(),
                SettingsRow::Toggle(toggle) => {
                    self.controller.flip_toggle(toggle, &mut self.screen);
                    self.announce_toggle(toggle);
                }
            },
        }
    }

    fn step_page(&mut self, delta: i32) {
        if self.controller.view().mode() == ViewMode::Card {
            self.status.set_raw("Card view shows every entry");
            return;
        }
        let scope = self.controller.go_to_page(delta as isize, &mut self.screen);
        if scope == RenderScope::None {
            self.status.page_edge();
        } else {
            let view = self.controller.view();
            self.status.set_raw(format!(
                "Page {} / {}",
                view.current_page(),
                view.total_pages()
            ));
        }
    }

    fn cycle_view_mode(&mut self) {
        self.controller.cycle_view_mode(&mut self.screen);
        let mode = self.controller.view().mode();
        self.status.set_raw(format!("View: {}", mode.label()));
    }

    fn step_items_per_page(&mut self, delta: i32) {
        if self.controller.step_items_per_page(delta, &mut self.screen) != RenderScope::None {
            let items = self.controller.view().items_per_page();
            self.status.set_raw(format!("{items} per page"));
        }
    }

    fn open_items_per_page(&mut self) {
        let current = self.controller.view().items_per_page();
        self.popup = Some(PopupState::items_per_page(current));
    }

    fn announce_toggle(&mut self, toggle: Toggle) {
        let state = if self.controller.view().toggle(toggle) { "on" } else { "off" };
        self.status.set_raw(format!("{}: {state}", toggle.label()));
    }
}
