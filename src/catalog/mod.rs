mod error;
mod source;
mod store;

pub use error::LoadError;
pub use source::{CatalogSource, FileSource, StaticSource};
pub use store::CatalogStore;
