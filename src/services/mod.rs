pub mod catalog_loader;
pub mod menu_filter;
pub mod recommendations;

pub use catalog_loader::{load_catalog, load_spicy_labels, CatalogSource, CategoryFile};
pub use menu_filter::filter_menus;
pub use recommendations::{category_of, recommend, RandomIndex, Recommendation, RngIndex};
