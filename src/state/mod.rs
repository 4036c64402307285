mod controller;
mod selection;
mod sink;
mod view;

pub use controller::{BrowserController, LoadState};
pub use selection::{SelectionController, SelectionOutcome};
pub use sink::{BasicInfoPanel, DetailPanel, ListItemModel, ListModel, RenderSink};
pub use view::{ITEMS_PER_PAGE_CHOICES, Pagination, RenderScope, Toggle, ViewMode, ViewState};
