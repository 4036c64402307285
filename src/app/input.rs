use std::sync::Arc;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::state::Toggle;

use super::keymap::{KeymapContext, KeymapStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ResetStatus,
    SwitchTab(i32),
    PickStep(i32),
    PageStep(i32),
    CycleViewMode,
    ItemsPerPageStep(i32),
    OpenItemsPerPage,
    Toggle(Toggle),
    SettingsStep(i32),
    SettingsAdjust(i32),
    Activate,
}

/// Maps raw key events to actions for the active context.
#[derive(Debug, Clone)]
pub(crate) struct InputRouter {
    keymap: Arc<KeymapStore>,
}

impl InputRouter {
    pub(crate) fn new(keymap: Arc<KeymapStore>) -> Self {
        Self { keymap }
    }

    pub(crate) fn classify(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.keymap.classify(key, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::default_store;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn releases_are_ignored() {
        let router = InputRouter::new(default_store());
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(router.classify(&release, KeymapContext::Guide), None);
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            router.classify(&press, KeymapContext::Guide),
            Some(KeyAction::Quit)
        );
    }
}
