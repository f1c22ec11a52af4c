pub mod cache;
pub mod normalize;
pub mod prompt;
pub mod provider;
pub mod record;

pub use cache::CatalogCache;
pub use provider::CatalogProvider;
pub use record::{Lab, ModelRecord, Status};
