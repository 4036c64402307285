use std::{fmt, num::NonZeroUsize, path::PathBuf};

use directories::ProjectDirs;

use crate::state::{Toggle, ViewMode};

use super::{MemorySettings, SettingsStore};

pub const VIEW_MODE_KEY: &str = "view-mode";
pub const ITEMS_PER_PAGE_KEY: &str = "items-per-page";
pub const DARK_MODE_KEY: &str = "dark-mode";
pub const IMAGE_MODE_KEY: &str = "image-mode";
pub const THICK_BORDER_KEY: &str = "thick-border-mode";

pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(value) => value,
    None => panic!("default page size must be positive"),
};

const ENABLED: &str = "enabled";
const DISABLED: &str = "disabled";

/// Snapshot of every persisted display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub view_mode: ViewMode,
    pub items_per_page: NonZeroUsize,
    pub dark_mode: bool,
    pub image_mode: bool,
    pub thick_border: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Card,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            dark_mode: false,
            image_mode: false,
            thick_border: false,
        }
    }
}

impl Preferences {
    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::DarkMode => self.dark_mode,
            Toggle::ImageMode => self.image_mode,
            Toggle::ThickBorder => self.thick_border,
        }
    }
}

/// Typed access to the settings store. Absent or unparsable values read as
/// their defaults; failed writes are logged and otherwise ignored.
pub struct Settings {
    store: Box<dyn SettingsStore>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings").finish_non_exhaustive()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(MemorySettings::new())
    }
}

impl Settings {
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn from_boxed(store: Box<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn load(&self) -> Preferences {
        Preferences {
            view_mode: self.view_mode(),
            items_per_page: self.items_per_page(),
            dark_mode: self.toggle(Toggle::DarkMode),
            image_mode: self.toggle(Toggle::ImageMode),
            thick_border: self.toggle(Toggle::ThickBorder),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.store
            .get(VIEW_MODE_KEY)
            .and_then(|raw| ViewMode::parse(&raw))
            .unwrap_or_default()
    }

    pub fn items_per_page(&self) -> NonZeroUsize {
        self.store
            .get(ITEMS_PER_PAGE_KEY)
            .and_then(|raw| raw.trim().parse::<NonZeroUsize>().ok())
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn toggle(&self, toggle: Toggle) -> bool {
        self.store.get(toggle_key(toggle)).as_deref() == Some(ENABLED)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.write(VIEW_MODE_KEY, mode.as_str());
    }

    pub fn set_items_per_page(&mut self, items: NonZeroUsize) {
        self.write(ITEMS_PER_PAGE_KEY, &items.to_string());
    }

    pub fn set_toggle(&mut self, toggle: Toggle, enabled: bool) {
        self.write(toggle_key(toggle), if enabled { ENABLED } else { DISABLED });
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, value, "failed to persist setting: {err}");
        }
    }
}

fn toggle_key(toggle: Toggle) -> &'static str {
    match toggle {
        Toggle::DarkMode => DARK_MODE_KEY,
        Toggle::ImageMode => IMAGE_MODE_KEY,
        Toggle::ThickBorder => THICK_BORDER_KEY,
    }
}

/// Platform config location for the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bestiary").map(|dirs| dirs.config_dir().join("settings.json"))
}
