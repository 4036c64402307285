//! Terminal rendering of the browser state.
//!
//! The controller pushes models into [`Screen`] through `RenderSink`; `draw`
//! paints the latest screen and reports where each item landed.

mod components;
mod screen;
mod theme;
mod view;

pub use screen::{ListArea, Screen};
pub use theme::{Palette, parse_hex_color};
pub use view::{HitMap, PopupRender, SettingsRow, Tab, UiContext, draw};
