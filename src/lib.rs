#![deny(rust_2018_idioms)]

//! Terminal reference browser for a fixed catalog of monster entries.
//!
//! The catalog is loaded once from a [`CatalogSource`]. [`BrowserController`]
//! keeps view mode, pagination, selection and the detail panels consistent and
//! pushes every change through a [`RenderSink`]. [`Bestiary`] wires the
//! controller to a ratatui front end.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod io;
pub mod presentation;
pub mod settings;
pub mod state;

pub use app::{Bestiary, UiOptions};
pub use catalog::{CatalogSource, CatalogStore, FileSource, LoadError, StaticSource};
pub use domain::{Entry, EntryId, RenderableGuide, parse_guide};
pub use settings::{FileSettings, MemorySettings, Settings, SettingsStore};
pub use state::{BrowserController, RenderSink, ViewState};

pub mod prelude {
    pub use super::{
        Bestiary, BrowserController, CatalogSource, CatalogStore, Entry, EntryId, FileSettings,
        FileSource, LoadError, MemorySettings, RenderSink, Settings, SettingsStore, StaticSource,
        UiOptions, ViewState, parse_guide,
    };
}
