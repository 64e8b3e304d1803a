pub mod catalog;
pub mod menu_item;
pub mod spicy;

pub use catalog::Catalog;
pub use menu_item::MenuItem;
pub use spicy::{SpicyLabels, SpicyLevel};
