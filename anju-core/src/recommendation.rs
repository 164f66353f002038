//! Ranked recommendation output.

/// Maximum number of dish names in a recommendation.
pub const MAX_RECOMMENDED_ITEMS: usize = 5;

/// Maximum number of pairing suggestions in a recommendation.
pub const MAX_PAIRINGS: usize = 5;

/// Dishes and paired drinks recommended for a set of answers.
///
/// `items` holds at most [`MAX_RECOMMENDED_ITEMS`] distinct, non-empty dish
/// names in rank order. `pairings` holds at most [`MAX_PAIRINGS`] distinct
/// drink suggestions in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Recommended dish names.
    pub items: Vec<String>,
    /// Suggested drinks collected from the recommended dishes.
    pub pairings: Vec<String>,
}

impl Recommendation {
    /// Whether nothing was recommended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.pairings.is_empty()
    }
}
