mod entry;
mod guide;
pub mod labels;

pub use entry::{BasicAttributes, DEFAULT_ACCENT, Detail, Entry, EntryId, StarRating};
pub use guide::{GuideNode, Inline, InlineText, RenderableGuide, TitledBlock, parse_guide};
