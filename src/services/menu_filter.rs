use std::collections::HashSet;

use crate::models::{Catalog, MenuItem, SpicyLevel};

/// Returns every menu of the selected categories whose spiciness is allowed.
///
/// Results follow catalog order: categories first, then items within each
/// category. An empty category or level set yields an empty result.
pub fn filter_menus<'a>(
    catalog: &'a Catalog,
    selected_categories: &HashSet<String>,
    allowed_levels: &HashSet<SpicyLevel>,
) -> Vec<&'a MenuItem> {
    catalog
        .iter()
        .filter(|(category, _)| selected_categories.contains(*category))
        .flat_map(|(_, items)| items)
        .filter(|item| allowed_levels.contains(&item.spicy_level))
        .collect()
}
