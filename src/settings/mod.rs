mod error;
mod repository;
mod store;

pub use error::SettingsError;
pub use repository::{
    DARK_MODE_KEY, DEFAULT_ITEMS_PER_PAGE, IMAGE_MODE_KEY, ITEMS_PER_PAGE_KEY, Preferences,
    Settings, THICK_BORDER_KEY, VIEW_MODE_KEY, default_settings_path,
};
pub use store::{FileSettings, MemorySettings, SettingsStore};
