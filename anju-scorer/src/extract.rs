//! Extract classification tokens and recommendation preferences from
//! answers.

use anju_core::{AnswerMap, AnswerSlot, DrinkCategory, PreferenceFlags};

use crate::rules::{BOILED_TRIGGERS, FRIED_TRIGGERS, KEYWORD_RULES, SPICY_TRIGGERS, contains_any};

/// Canonical tokens extracted from answers, in rule order.
///
/// Repeats are kept: a token contributed by two rules counts twice when
/// scoring a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<&'static str>,
}

impl TokenList {
    /// Iterate over tokens in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tokens.iter().copied()
    }

    /// Number of tokens, counting repeats.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no rule fired.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Count tokens that occur as substrings of `text`, with repetition.
    #[must_use]
    pub fn matches_in(&self, text: &str) -> usize {
        self.iter().filter(|token| text.contains(token)).count()
    }
}

/// Extract the classification token list from `answers`.
///
/// Only the weather, mood, drink, flavour and cooking slots are read;
/// missing answers behave like empty text and contribute nothing.
///
/// # Examples
/// ```
/// use anju_core::AnswerMap;
/// use anju_scorer::extract_tokens;
///
/// let answers = AnswerMap::new()
///     .with_answer(5, "소주")
///     .with_answer(11, "매콤하고 얼큰한 맛");
/// let tokens: Vec<&str> = extract_tokens(&answers).iter().collect();
/// assert_eq!(tokens, vec!["소주", "매콤", "얼큰"]);
/// ```
#[must_use]
pub fn extract_tokens(answers: &AnswerMap) -> TokenList {
    let tokens = KEYWORD_RULES
        .iter()
        .filter(|rule| rule.fires(answers.slot(rule.slot)))
        .flat_map(|rule| rule.tokens.iter().copied())
        .collect();
    TokenList { tokens }
}

/// Derive recommendation preferences from `answers`.
///
/// # Examples
/// ```
/// use anju_core::{AnswerMap, DrinkCategory};
/// use anju_scorer::extract_preferences;
///
/// let answers = AnswerMap::new()
///     .with_answer(5, "와인")
///     .with_answer(12, "끓이거나 삶은 음식");
/// let flags = extract_preferences(&answers);
/// assert!(flags.prefers_boiled);
/// assert!(!flags.prefers_fried);
/// assert!(flags.prefers_drink(DrinkCategory::Wine));
/// ```
#[must_use]
pub fn extract_preferences(answers: &AnswerMap) -> PreferenceFlags {
    let drink = answers.slot(AnswerSlot::Drink);
    let cook = answers.slot(AnswerSlot::Cook);
    let mut flags = PreferenceFlags::new();
    flags.wants_spicy = contains_any(answers.slot(AnswerSlot::Flavour), SPICY_TRIGGERS);
    flags.prefers_fried = contains_any(cook, FRIED_TRIGGERS);
    flags.prefers_boiled = contains_any(cook, BOILED_TRIGGERS);
    for category in DrinkCategory::ALL {
        if category.matches(drink) {
            flags.prefer_drink(category);
        }
    }
    flags
}
