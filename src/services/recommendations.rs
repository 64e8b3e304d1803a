use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;

use super::menu_filter::filter_menus;
use crate::models::{Catalog, MenuItem, SpicyLevel};

/// Source of uniformly distributed indices
///
/// `pick` is only called with `len > 0` and should return a value in `0..len`.
#[cfg_attr(test, mockall::automock)]
pub trait RandomIndex {
    fn pick(&mut self, len: usize) -> usize;
}

/// `RandomIndex` backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngIndex<R>(pub R);

impl RngIndex<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomIndex for RngIndex<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Outcome of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation<'a> {
    Picked(&'a MenuItem),
    NoMatch,
}

impl<'a> Recommendation<'a> {
    pub fn menu(self) -> Option<&'a MenuItem> {
        match self {
            Recommendation::Picked(item) => Some(item),
            Recommendation::NoMatch => None,
        }
    }
}

/// Picks one menu matching the selection, or `NoMatch` when nothing matches
pub fn recommend<'a, P: RandomIndex + ?Sized>(
    catalog: &'a Catalog,
    selected_categories: &HashSet<String>,
    allowed_levels: &HashSet<SpicyLevel>,
    picker: &mut P,
) -> Recommendation<'a> {
    let candidates = filter_menus(catalog, selected_categories, allowed_levels);
    if candidates.is_empty() {
        tracing::debug!(
            categories = selected_categories.len(),
            levels = allowed_levels.len(),
            "No menu matches selection"
        );
        return Recommendation::NoMatch;
    }

    let index = picker.pick(candidates.len()) % candidates.len();
    let item = candidates[index];

    tracing::debug!(
        candidates = candidates.len(),
        index,
        menu = %item.name,
        "Picked menu"
    );

    Recommendation::Picked(item)
}

/// First category, in catalog order, holding a menu with this name
pub fn category_of<'a>(catalog: &'a Catalog, menu_name: &str) -> Option<&'a str> {
    catalog
        .iter()
        .find(|(_, items)| items.iter().any(|item| item.name == menu_name))
        .map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn sample_catalog() -> Catalog {
        [
            (
                "한식".to_string(),
                vec![MenuItem::new("김치찌개", 2), MenuItem::new("불고기", 0)],
            ),
            ("일식".to_string(), vec![MenuItem::new("초밥", 0)]),
        ]
        .into_iter()
        .collect()
    }

    fn categories(names: &[&str]) -> HashSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn levels(levels: &[u8]) -> HashSet<SpicyLevel> {
        levels.iter().copied().map(SpicyLevel).collect()
    }

    #[test]
    fn test_singleton_is_always_picked() {
        let catalog = sample_catalog();
        let mut picker = MockRandomIndex::new();
        picker.expect_pick().with(eq(1)).times(1).return_const(0usize);

        let result = recommend(&catalog, &categories(&["한식"]), &levels(&[0]), &mut picker);
        assert_eq!(result, Recommendation::Picked(&MenuItem::new("불고기", 0)));
    }

    #[test]
    fn test_picker_index_selects_from_filtered_menus() {
        let catalog = sample_catalog();
        let mut picker = MockRandomIndex::new();
        picker.expect_pick().with(eq(3)).times(1).return_const(2usize);

        let result = recommend(
            &catalog,
            &categories(&["한식", "일식"]),
            &levels(&[0, 2]),
            &mut picker,
        );
        assert_eq!(result.menu(), Some(&MenuItem::new("초밥", 0)));
    }

    #[test]
    fn test_no_match_does_not_consult_picker() {
        let catalog = sample_catalog();
        let mut picker = MockRandomIndex::new();
        picker.expect_pick().never();

        let result = recommend(&catalog, &categories(&[]), &levels(&[0, 1, 2, 3]), &mut picker);
        assert_eq!(result, Recommendation::NoMatch);

        let result = recommend(&catalog, &categories(&["일식"]), &levels(&[3]), &mut picker);
        assert_eq!(result.menu(), None);
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let catalog = sample_catalog();
        let mut picker = MockRandomIndex::new();
        picker.expect_pick().return_const(4usize);

        let result = recommend(
            &catalog,
            &categories(&["한식", "일식"]),
            &levels(&[0, 2]),
            &mut picker,
        );
        assert_eq!(result.menu(), Some(&MenuItem::new("불고기", 0)));
    }

    #[test]
    fn test_rng_index_stays_in_range() {
        let catalog = Catalog::builtin();
        let selected: HashSet<String> = catalog.categories().map(str::to_string).collect();
        let allowed = levels(&[0, 1, 2, 3]);
        let mut picker = RngIndex::seeded(7);

        for _ in 0..200 {
            let item = recommend(&catalog, &selected, &allowed, &mut picker)
                .menu()
                .unwrap();
            assert!(category_of(&catalog, &item.name).is_some());
        }
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let mut first = RngIndex::seeded(42);
        let mut second = RngIndex::seeded(42);
        let a: Vec<usize> = (0..20).map(|_| first.pick(76)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.pick(76)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_of_first_match_wins() {
        let catalog: Catalog = [
            ("한식".to_string(), vec![MenuItem::new("삼겹살", 0)]),
            ("고기구이".to_string(), vec![MenuItem::new("삼겹살", 0), MenuItem::new("양꼬치", 1)]),
        ]
        .into_iter()
        .collect();

        assert_eq!(category_of(&catalog, "삼겹살"), Some("한식"));
        assert_eq!(category_of(&catalog, "양꼬치"), Some("고기구이"));
        assert_eq!(category_of(&catalog, "피자"), None);
    }
}
