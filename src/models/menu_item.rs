use serde::{Deserialize, Serialize};

use super::SpicyLevel;

/// A single dish on the menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Display name of the dish
    pub name: String,
    /// How hot the dish is
    pub spicy_level: SpicyLevel,
}

impl MenuItem {
    /// Creates a new menu item
    pub fn new(name: impl Into<String>, spicy_level: u8) -> Self {
        Self {
            name: name.into(),
            spicy_level: SpicyLevel(spicy_level),
        }
    }
}
