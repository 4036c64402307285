mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{parse_catalog_str, parse_settings_str};
pub use output::{OutputDestination, render_settings_string, write_document};
