mod browser;
pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod popup;
mod runtime;
mod status;
mod terminal;

pub use browser::Bestiary;
pub use input::KeyAction;
pub use keymap::KeymapStore;
pub use options::UiOptions;
