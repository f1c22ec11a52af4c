pub mod filter;
pub mod render;
pub mod state;
pub mod theme;

pub use filter::{FilterDimension, FilterSet, Selection};
pub use state::{CatalogSource, CatalogStats, CatalogView};
pub use theme::Theme;
