//! Test-only fixtures: a table-driven `DishScorer` and a small question
//! catalogue covering every scoring slot.

use std::collections::HashMap;

use crate::{DishRecord, DishScorer, PreferenceFlags, Question};

/// `DishScorer` that looks scores up by dish name and ignores preferences.
///
/// Unknown names score zero.
#[derive(Debug, Clone, Default)]
pub struct NameScorer {
    scores: HashMap<String, u32>,
}

impl NameScorer {
    /// Assign `score` to every dish called `name`.
    #[must_use]
    pub fn with_score(mut self, name: &str, score: u32) -> Self {
        self.scores.insert(name.to_owned(), score);
        self
    }
}

impl DishScorer for NameScorer {
    fn score(&self, dish: &DishRecord, _preferences: &PreferenceFlags) -> u32 {
        self.scores.get(&dish.name).copied().unwrap_or(0)
    }
}

/// Questions 1, 2, 5, 11 and 12 with options exercising every keyword rule
/// family, sorted by question number.
#[must_use]
pub fn scoring_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "상황",
            "오늘 날씨는 어떤가요?",
            ["화창한 날", "비 오는 날", "흐리고 쌀쌀한 날", "춥거나 더움"],
        ),
        Question::new(
            2,
            "상황",
            "지금 기분은?",
            ["행복해요", "스트레스 가득", "차분해요", "헛헛하고 아쉽다"],
        ),
        Question::new(
            5,
            "술",
            "오늘 마시고 싶은 술은?",
            ["소주", "맥주", "막걸리", "와인이나 칵테일"],
        ),
        Question::new(
            11,
            "맛",
            "끌리는 맛은?",
            ["매콤하고 얼큰한 맛", "달콤짭짤한 맛", "시원하고 개운한 맛", "고소하고 느끼한 맛"],
        ),
        Question::new(
            12,
            "조리",
            "좋아하는 조리 방식은?",
            ["튀기거나 볶은 음식", "구운 불맛 음식", "끓이거나 삶은 음식", "날것 그대로"],
        ),
    ]
}
