use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::BTreeMap, fmt::Display};

/// Heat intensity of a dish. Levels 0 through 3 are the known scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpicyLevel(pub u8);

impl SpicyLevel {
    pub const NOT_SPICY: SpicyLevel = SpicyLevel(0);
}

impl Display for SpicyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display labels for spiciness levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpicyLabels {
    labels: BTreeMap<SpicyLevel, String>,
}

impl Default for SpicyLabels {
    fn default() -> Self {
        Self::from_iter([
            (SpicyLevel(0), "🍽️ (안매움)".to_string()),
            (SpicyLevel(1), "🌶️ (약간 매움)".to_string()),
            (SpicyLevel(2), "🌶️🌶️ (매움)".to_string()),
            (SpicyLevel(3), "🌶️🌶️🌶️ (아주 매움)".to_string()),
        ])
    }
}

impl FromIterator<(SpicyLevel, String)> for SpicyLabels {
    fn from_iter<I: IntoIterator<Item = (SpicyLevel, String)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl SpicyLabels {
    /// Returns the label for a level, or the raw number when no label is known
    pub fn label(&self, level: SpicyLevel) -> Cow<'_, str> {
        match self.labels.get(&level) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(level.to_string()),
        }
    }

    /// Labelled levels in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (SpicyLevel, &str)> {
        self.labels.iter().map(|(level, label)| (*level, label.as_str()))
    }

    pub fn levels(&self) -> impl Iterator<Item = SpicyLevel> + '_ {
        self.labels.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
