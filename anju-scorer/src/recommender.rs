//! Rank the dish catalogue and collect drink pairings.

use std::collections::HashSet;

use anju_core::{
    AnswerMap, DishRecord, DishScorer, DrinkCategory, MAX_PAIRINGS, MAX_RECOMMENDED_ITEMS,
    PreferenceFlags, Recommendation,
};
use log::debug;

use crate::extract::extract_preferences;

/// Points per spiciness level when the participant wants spicy food.
pub const SPICE_MULTIPLIER: u32 = 2;
/// Bonus for a fried dish when fried food is preferred.
pub const FRIED_BONUS: u32 = 5;
/// Bonus for a soup when boiled food is preferred.
pub const BOILED_BONUS: u32 = 5;
/// Bonus per preferred drink category found in the dish's preferred pairing.
pub const DRINK_MATCH_BONUS: u32 = 4;

/// The standard preference-based [`DishScorer`].
///
/// Scores add up as follows:
/// - `SPICE_MULTIPLIER × spicy_level` when spicy food is wanted;
/// - `FRIED_BONUS` for fried dishes when fried food is preferred;
/// - `BOILED_BONUS` for soups when boiled food is preferred;
/// - `DRINK_MATCH_BONUS` for each preferred drink category matched by the
///   dish's `best_drink`. Alternate pairings never score.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceScorer;

impl DishScorer for PreferenceScorer {
    fn score(&self, dish: &DishRecord, preferences: &PreferenceFlags) -> u32 {
        let spice = if preferences.wants_spicy {
            dish.spicy_level.saturating_mul(SPICE_MULTIPLIER)
        } else {
            0
        };
        let fried = if preferences.prefers_fried && dish.is_fried {
            FRIED_BONUS
        } else {
            0
        };
        let boiled = if preferences.prefers_boiled && dish.is_soup {
            BOILED_BONUS
        } else {
            0
        };
        let drinks = DrinkCategory::ALL
            .into_iter()
            .filter(|category| {
                preferences.prefers_drink(*category) && category.matches(&dish.best_drink)
            })
            .fold(0_u32, |total, _| total.saturating_add(DRINK_MATCH_BONUS));
        spice
            .saturating_add(fried)
            .saturating_add(boiled)
            .saturating_add(drinks)
    }
}

/// Ranks dishes with a [`DishScorer`] and builds a [`Recommendation`].
///
/// # Examples
/// ```
/// use anju_core::{AnswerMap, DishRecord};
/// use anju_scorer::Recommender;
///
/// let answers = AnswerMap::new().with_answer(11, "매콤하고 얼큰한 맛");
/// let dishes = vec![
///     DishRecord::new("계란말이").with_best_drink("막걸리"),
///     DishRecord::new("닭발").with_spicy_level(3).with_best_drink("소주"),
/// ];
/// let recommendation = Recommender::new().recommend(&answers, &dishes);
/// assert_eq!(recommendation.items, vec!["닭발", "계란말이"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recommender<S = PreferenceScorer> {
    scorer: S,
}

impl Recommender {
    /// Build a recommender using [`PreferenceScorer`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scorer: PreferenceScorer,
        }
    }
}

impl<S: DishScorer> Recommender<S> {
    /// Build a recommender around a custom scorer.
    pub const fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Recommend up to five dishes and five pairings for `answers`.
    ///
    /// Dishes are stable-sorted by descending score, so catalogue order
    /// decides ties and which of several same-named dishes is kept. Blank
    /// names are skipped. Pairings are gathered from the kept dishes in
    /// rank order: preferred pairing first, then the alternates.
    pub fn recommend(&self, answers: &AnswerMap, dishes: &[DishRecord]) -> Recommendation {
        let preferences = extract_preferences(answers);
        let ranked = self.rank(dishes, &preferences);
        let accepted = accept_distinct(ranked);
        let pairings = collect_pairings(&accepted);
        let items: Vec<String> = accepted
            .iter()
            .map(|dish| dish.name.trim().to_owned())
            .collect();
        debug!(
            "recommended {} dishes and {} pairings from {} candidates",
            items.len(),
            pairings.len(),
            dishes.len()
        );
        Recommendation { items, pairings }
    }

    fn rank<'d>(
        &self,
        dishes: &'d [DishRecord],
        preferences: &PreferenceFlags,
    ) -> Vec<&'d DishRecord> {
        let mut scored: Vec<(u32, &DishRecord)> = dishes
            .iter()
            .map(|dish| (self.scorer.score(dish, preferences), dish))
            .collect();
        // `sort_by` is stable, keeping catalogue order among equal scores.
        scored.sort_by(|left, right| right.0.cmp(&left.0));
        scored.into_iter().map(|(_, dish)| dish).collect()
    }
}

fn accept_distinct(ranked: Vec<&DishRecord>) -> Vec<&DishRecord> {
    let mut seen = HashSet::new();
    let mut accepted = Vec::with_capacity(MAX_RECOMMENDED_ITEMS);
    for dish in ranked {
        if accepted.len() >= MAX_RECOMMENDED_ITEMS {
            break;
        }
        let name = dish.name.trim();
        if name.is_empty() || !seen.insert(name) {
            continue;
        }
        accepted.push(dish);
    }
    accepted
}

fn collect_pairings(accepted: &[&DishRecord]) -> Vec<String> {
    let mut pairings: Vec<String> = Vec::with_capacity(MAX_PAIRINGS);
    let candidates = accepted
        .iter()
        .flat_map(|dish| dish.pairings())
        .map(str::trim)
        .filter(|drink| !drink.is_empty());
    for drink in candidates {
        if pairings.len() >= MAX_PAIRINGS {
            break;
        }
        if !pairings.iter().any(|kept| kept == drink) {
            pairings.push(drink.to_owned());
        }
    }
    pairings
}

/// Recommend dishes for `answers` with the standard [`PreferenceScorer`].
///
/// Never fails: an empty catalogue yields an empty recommendation.
#[must_use]
pub fn recommend(answers: &AnswerMap, dishes: &[DishRecord]) -> Recommendation {
    Recommender::new().recommend(answers, dishes)
}
