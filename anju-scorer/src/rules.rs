//! Keyword rules mapping answer text to canonical classification tokens.
//!
//! Rules are evaluated in declaration order: drink, mood, weather, flavour,
//! then cooking style. A rule fires when any trigger is a substring of the
//! slot's answer, appending every one of its tokens.

use anju_core::{AnswerSlot, DrinkCategory};

/// One trigger group and the tokens it contributes.
#[derive(Debug)]
pub(crate) struct KeywordRule {
    pub(crate) slot: AnswerSlot,
    pub(crate) triggers: &'static [&'static str],
    pub(crate) tokens: &'static [&'static str],
}

impl KeywordRule {
    const fn new(
        slot: AnswerSlot,
        triggers: &'static [&'static str],
        tokens: &'static [&'static str],
    ) -> Self {
        Self {
            slot,
            triggers,
            tokens,
        }
    }

    const fn drink(category: DrinkCategory, tokens: &'static [&'static str]) -> Self {
        Self::new(AnswerSlot::Drink, category.triggers(), tokens)
    }

    pub(crate) fn fires(&self, text: &str) -> bool {
        contains_any(text, self.triggers)
    }
}

pub(crate) const SPICY_TRIGGERS: &[&str] = &["매콤", "얼큰"];
pub(crate) const FRIED_TRIGGERS: &[&str] = &["튀기", "볶"];
pub(crate) const BOILED_TRIGGERS: &[&str] = &["끓", "삶"];

pub(crate) static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule::drink(DrinkCategory::Soju, &["소주"]),
    KeywordRule::drink(DrinkCategory::Beer, &["맥주"]),
    KeywordRule::drink(DrinkCategory::Makgeolli, &["막걸리"]),
    KeywordRule::drink(DrinkCategory::Wine, &["와인"]),
    KeywordRule::new(AnswerSlot::Mood, &["스트레스"], &["스트레스"]),
    KeywordRule::new(AnswerSlot::Mood, &["행복"], &["행복"]),
    KeywordRule::new(AnswerSlot::Mood, &["차분"], &["차분"]),
    KeywordRule::new(AnswerSlot::Mood, &["헛헛", "아쉽"], &["감성"]),
    KeywordRule::new(AnswerSlot::Weather, &["비", "눈"], &["비"]),
    KeywordRule::new(AnswerSlot::Weather, &["흐리"], &["흐림"]),
    KeywordRule::new(AnswerSlot::Weather, &["화창"], &["화창"]),
    KeywordRule::new(AnswerSlot::Weather, &["춥", "더움"], &["추위"]),
    KeywordRule::new(AnswerSlot::Flavour, SPICY_TRIGGERS, &["매콤", "얼큰"]),
    KeywordRule::new(AnswerSlot::Flavour, &["달콤", "짭짤"], &["달콤", "짭짤"]),
    KeywordRule::new(AnswerSlot::Flavour, &["시원", "개운"], &["개운"]),
    KeywordRule::new(AnswerSlot::Flavour, &["느끼", "고소"], &["고소", "느끼"]),
    KeywordRule::new(AnswerSlot::Cook, FRIED_TRIGGERS, &["튀김"]),
    KeywordRule::new(AnswerSlot::Cook, &["구운", "불"], &["불맛"]),
    KeywordRule::new(AnswerSlot::Cook, BOILED_TRIGGERS, &["끓인"]),
    KeywordRule::new(AnswerSlot::Cook, &["날것"], &["날것"]),
];

/// Whether any of `triggers` occurs in `text`.
pub(crate) fn contains_any(text: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| text.contains(trigger))
}
