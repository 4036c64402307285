use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::{
    catalog::{CatalogStore, LoadError},
    presentation::{self, HitMap, Screen, Tab, UiContext},
    state::{BrowserController, ViewState},
};

use super::{
    input::{InputRouter, KeyAction},
    keymap::{KeymapContext, KeymapStore},
    options::UiOptions,
    popup::PopupState,
    status::StatusLine,
    terminal::TerminalGuard,
};

mod actions;

pub(crate) type LoadReceiver = oneshot::Receiver<Result<CatalogStore, LoadError>>;

pub(crate) struct App {
    controller: BrowserController,
    screen: Screen,
    options: UiOptions,
    status: StatusLine,
    title: Option<String>,
    tab: Tab,
    settings_cursor: usize,
    popup: Option<PopupState>,
    hits: HitMap,
    pending: Option<LoadReceiver>,
    input_router: InputRouter,
    keymap_store: Arc<KeymapStore>,
    should_quit: bool,
}

impl App {
    pub fn new(
        view: ViewState,
        options: UiOptions,
        title: Option<String>,
        pending: Option<LoadReceiver>,
    ) -> Self {
        let keymap_store = options.keymap_store.clone();
        let mut controller = BrowserController::new(view);
        let mut screen = Screen::new();
        controller.start(&mut screen);
        let mut status = StatusLine::new();
        status.loading();
        Self {
            controller,
            screen,
            options,
            status,
            title,
            tab: Tab::default(),
            settings_cursor: 0,
            popup: None,
            hits: HitMap::default(),
            pending,
            input_router: InputRouter::new(keymap_store.clone()),
            keymap_store,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.poll_load();
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(_, _) => terminal.autoresize()?,
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(())
    }

    /// Install the catalog once the loader has answered.
    fn poll_load(&mut self) {
        let Some(receiver) = self.pending.as_mut() else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(LoadError::Interrupted),
        };
        self.pending = None;
        self.install(result);
    }

    fn install(&mut self, result: Result<CatalogStore, LoadError>) {
        let loaded = result.is_ok();
        if !self.controller.on_loaded(result, &mut self.screen) {
            return;
        }
        if loaded {
            self.status.loaded(self.controller.catalog().len());
        } else {
            self.status.load_failed();
        }
    }

    fn context(&self) -> KeymapContext {
        match self.tab {
            Tab::Guide => KeymapContext::Guide,
            Tab::Settings => KeymapContext::Settings,
        }
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        if self.popup.is_some() {
            return Some("↑/↓ choose • Enter apply • Esc cancel".to_string());
        }
        self.keymap_store.help_text(self.context())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        self.hits = presentation::draw(
            frame,
            &self.screen,
            UiContext {
                title: self.title.as_deref(),
                tab: self.tab,
                settings_cursor: self.settings_cursor,
                status_message: self.status.message(),
                help: help.as_deref(),
                popup: self.popup.as_ref().map(PopupState::as_render),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_popup_key(&key) {
            return;
        }
        if let Some(action) = self.input_router.classify(&key, self.context()) {
            self.apply_action(action);
        }
    }

    fn handle_popup_key(&mut self, key: &KeyEvent) -> bool {
        let Some(popup) = &mut self.popup else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.ready();
            }
            KeyCode::Up | KeyCode::Char('k') => popup.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => popup.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let value = popup.value();
                self.popup = None;
                if let Some(value) = value {
                    self.controller.set_items_per_page(value, &mut self.screen);
                    self.status.set_raw(format!("{value} per page"));
                }
            }
            _ => {}
        }
        true
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.popup.is_some() {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.hits.item_at(mouse.column, mouse.row) {
                    let outcome = self.controller.pick(id, &mut self.screen);
                    self.status.picked(outcome);
                }
            }
            MouseEventKind::ScrollDown => self.apply_action(KeyAction::PickStep(1)),
            MouseEventKind::ScrollUp => self.apply_action(KeyAction::PickStep(-1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Entry, EntryId},
        presentation::ListArea,
        settings::{MemorySettings, Settings},
        state::{LoadState, ViewMode},
    };
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn catalog(count: i64) -> CatalogStore {
        let entries = (1..=count)
            .map(|id| {
                serde_json::from_value::<Entry>(json!({
                    "id": id,
                    "name": format!("monster {id}"),
                    "species": "beast"
                }))
                .unwrap()
            })
            .collect();
        CatalogStore::from_entries(entries).unwrap()
    }

    fn app_with(settings: MemorySettings) -> App {
        let view = ViewState::new(Settings::new(settings));
        App::new(view, UiOptions::default(), None, None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn paint(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    #[test]
    fn loader_result_is_picked_up_once() {
        let (sender, receiver) = oneshot::channel();
        let view = ViewState::new(Settings::default());
        let mut app = App::new(view, UiOptions::default(), None, Some(receiver));
        app.poll_load();
        assert_eq!(app.screen.list, ListArea::Loading);
        sender.send(Ok(catalog(3))).unwrap();
        app.poll_load();
        assert!(app.pending.is_none());
        assert_eq!(app.controller.load_state(), &LoadState::Ready);
        assert_eq!(app.screen.selected, Some(EntryId(1)));
        assert_eq!(app.status.message(), "3 entries loaded");
    }

    #[test]
    fn dropped_loader_surfaces_a_failure() {
        let (sender, receiver) = oneshot::channel::<Result<CatalogStore, LoadError>>();
        let view = ViewState::new(Settings::default());
        let mut app = App::new(view, UiOptions::default(), None, Some(receiver));
        drop(sender);
        app.poll_load();
        assert!(matches!(app.screen.list, ListArea::Failed(_)));
        assert_eq!(app.screen.selected, None);
    }

    #[test]
    fn keys_drive_paging_and_selection() {
        let mut app = app_with(MemorySettings::new().with_value("view-mode", "paginated"));
        app.install(Ok(catalog(10)));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.screen.selected, Some(EntryId(2)));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.view().current_page(), 2);
        assert_eq!(app.screen.selected, Some(EntryId(9)));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.view().current_page(), 2);
        assert_eq!(app.status.message(), "No more pages");
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.controller.view().mode(), ViewMode::Card);
        assert_eq!(app.screen.item_count(), 10);
    }

    #[test]
    fn settings_tab_opens_and_applies_the_page_size_chooser() {
        let mut app = app_with(MemorySettings::new().with_value("view-mode", "paginated"));
        app.install(Ok(catalog(10)));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Settings);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_some());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_none());
        assert_eq!(app.controller.view().items_per_page().get(), 10);
        assert_eq!(app.controller.view().total_pages(), 1);
    }

    #[test]
    fn settings_rows_flip_toggles() {
        let mut app = app_with(MemorySettings::new());
        app.install(Ok(catalog(2)));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.screen.dark_mode);
        press(&mut app, KeyCode::Left);
        assert!(!app.screen.dark_mode);
    }

    #[test]
    fn clicking_an_item_selects_it() {
        let mut app = app_with(MemorySettings::new().with_value("view-mode", "paginated"));
        app.install(Ok(catalog(5)));
        paint(&mut app);
        assert_eq!(app.hits.len(), 5);
        let target = (0..30)
            .flat_map(|row| (0..100).map(move |column| (column, row)))
            .find(|(column, row)| app.hits.item_at(*column, *row) == Some(EntryId(4)))
            .expect("entry 4 is on screen");
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.0,
            row: target.1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.screen.selected, Some(EntryId(4)));
        assert_eq!(app.status.message(), "Selected #4");
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app_with(MemorySettings::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
