//! Answers selected by a participant, keyed by question number.

use std::collections::BTreeMap;

use crate::AnswerSlot;

/// Mapping from question number to the exact text of the chosen option.
///
/// Only answered questions are present. Lookups for missing questions yield
/// the empty string so scoring never has to special-case gaps.
///
/// # Examples
/// ```
/// use anju_core::{AnswerMap, AnswerSlot};
///
/// let answers = AnswerMap::new().with_answer(5, "소주 한 잔");
/// assert_eq!(answers.slot(AnswerSlot::Drink), "소주 한 잔");
/// assert_eq!(answers.slot(AnswerSlot::Weather), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AnswerMap {
    answers: BTreeMap<u32, String>,
}

impl AnswerMap {
    /// Construct an empty answer map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for `q_no`, returning the previous answer if any.
    pub fn insert(&mut self, q_no: u32, text: impl Into<String>) -> Option<String> {
        self.answers.insert(q_no, text.into())
    }

    /// Record an answer while returning `self` for chaining.
    #[must_use]
    pub fn with_answer(mut self, q_no: u32, text: impl Into<String>) -> Self {
        self.insert(q_no, text);
        self
    }

    /// Return the recorded answer for `q_no`, if present.
    #[must_use]
    pub fn get(&self, q_no: u32) -> Option<&str> {
        self.answers.get(&q_no).map(String::as_str)
    }

    /// Return the answer for `q_no`, or the empty string when unanswered.
    #[must_use]
    pub fn text(&self, q_no: u32) -> &str {
        self.get(q_no).unwrap_or_default()
    }

    /// Return the answer stored in one of the scoring slots.
    #[must_use]
    pub fn slot(&self, slot: AnswerSlot) -> &str {
        self.text(slot.question_no())
    }

    /// Whether `q_no` has a non-empty answer.
    #[must_use]
    pub fn is_answered(&self, q_no: u32) -> bool {
        self.get(q_no).is_some_and(|text| !text.is_empty())
    }

    /// Number of recorded answers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether no answers have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Remove every answer.
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Iterate over answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.answers.iter().map(|(q_no, text)| (*q_no, text.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(q_no, text)| (q_no, text.into()))
                .collect(),
        }
    }
}
