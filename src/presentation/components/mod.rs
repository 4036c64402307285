mod cards;
mod detail;
mod footer;
mod layout;
mod list;
mod popup;
mod settings;
mod tabs;

pub use detail::render_detail;
pub use footer::render_footer;
pub use list::render_list_area;
pub use popup::render_popup;
pub use settings::render_settings;
pub use tabs::render_tabs;
