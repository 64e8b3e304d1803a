use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, SpicyLabels, SpicyLevel},
};

/// Categories and spiciness levels chosen by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub spicy_levels: Vec<SpicyLevel>,
}

/// Notes attached to a response when the selection had to be adjusted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionWarning {
    /// No spiciness level was chosen, so only non-spicy menus are considered
    NoSpicyLevelSelected,
}

/// Selection checked against the catalog, ready for filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    pub categories: HashSet<String>,
    pub spicy_levels: HashSet<SpicyLevel>,
    pub warnings: Vec<SelectionWarning>,
}

impl Selection {
    /// Every category and every labelled spiciness level
    pub fn everything(catalog: &Catalog, labels: &SpicyLabels) -> Self {
        Self {
            categories: catalog.categories().map(str::to_string).collect(),
            spicy_levels: labels.levels().collect(),
        }
    }

    /// Validates category names and defaults an empty level choice to not spicy
    pub fn resolve(&self, catalog: &Catalog) -> AppResult<ResolvedSelection> {
        let unknown: Vec<&str> = self
            .categories
            .iter()
            .map(String::as_str)
            .filter(|category| !catalog.contains_category(category))
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Unknown categories: {}",
                unknown.join(", ")
            )));
        }

        let mut warnings = Vec::new();
        let spicy_levels: HashSet<SpicyLevel> = if self.spicy_levels.is_empty() {
            warnings.push(SelectionWarning::NoSpicyLevelSelected);
            HashSet::from([SpicyLevel::NOT_SPICY])
        } else {
            self.spicy_levels.iter().copied().collect()
        };

        Ok(ResolvedSelection {
            categories: self.categories.iter().cloned().collect(),
            spicy_levels,
            warnings,
        })
    }
}

/// Where the user is in the recommendation flow
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Nothing recommended yet
    #[default]
    Initial,
    /// At least one recommendation was made; "recommend again" is available
    Recommended,
}

/// Client-held UI state, sent back with every session request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub selection: Selection,
    #[serde(default)]
    pub phase: SessionPhase,
}

impl Session {
    /// Fresh session with everything selected
    pub fn initial(catalog: &Catalog, labels: &SpicyLabels) -> Self {
        Self {
            selection: Selection::everything(catalog, labels),
            phase: SessionPhase::Initial,
        }
    }

    pub fn select_all(mut self, catalog: &Catalog) -> Self {
        self.selection.categories = catalog.categories().map(str::to_string).collect();
        self
    }

    pub fn deselect_all(mut self) -> Self {
        self.selection.categories.clear();
        self
    }

    /// Transition taken by the recommend action, whatever its outcome
    pub fn recommended(mut self) -> Self {
        self.phase = SessionPhase::Recommended;
        self
    }

    /// Checks that "recommend again" is available in the current phase
    pub fn ensure_can_recommend_again(&self) -> AppResult<()> {
        match self.phase {
            SessionPhase::Recommended => Ok(()),
            SessionPhase::Initial => Err(AppError::Conflict(
                "Nothing has been recommended yet".to_string(),
            )),
        }
    }
}
