//! Combine classification and recommendation into a displayable result.

use anju_core::{AnswerMap, DishRecord, TypeProfile};
use serde::{Deserialize, Serialize};

use crate::{classify, recommend};

/// Title used when the selected type has no profile or a blank keyword.
pub const DEFAULT_TITLE: &str = "오늘의 유형";
/// Subtitle used when the selected type has no profile or a blank combo.
pub const DEFAULT_SUBTITLE: &str = "선택 결과 기반 추천";

/// Everything the result screen shows for a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    /// Selected type identifier.
    pub type_no: i64,
    /// Display title of the selected type.
    pub title: String,
    /// Core combination of the selected type.
    pub subtitle: String,
    /// Recommended dish names.
    pub dishes: Vec<String>,
    /// Suggested drinks.
    pub drinks: Vec<String>,
}

fn non_blank_or<'a>(text: Option<&'a str>, fallback: &'a str) -> String {
    text.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

/// Classify `answers`, recommend dishes, and resolve display text.
///
/// # Examples
/// ```
/// use anju_core::AnswerMap;
/// use anju_scorer::{DEFAULT_TITLE, evaluate};
///
/// let outcome = evaluate(&AnswerMap::new(), &[], &[]);
/// assert_eq!(outcome.type_no, 1);
/// assert_eq!(outcome.title, DEFAULT_TITLE);
/// assert!(outcome.dishes.is_empty());
/// ```
#[must_use]
pub fn evaluate(
    answers: &AnswerMap,
    profiles: &[TypeProfile],
    dishes: &[DishRecord],
) -> QuizOutcome {
    let type_no = classify(answers, profiles);
    let profile = profiles.iter().find(|profile| profile.type_no == type_no);
    let recommendation = recommend(answers, dishes);
    QuizOutcome {
        type_no,
        title: non_blank_or(profile.map(|p| p.keyword.as_str()), DEFAULT_TITLE),
        subtitle: non_blank_or(profile.map(|p| p.core_combo.as_str()), DEFAULT_SUBTITLE),
        dishes: recommendation.items,
        drinks: recommendation.pairings,
    }
}
