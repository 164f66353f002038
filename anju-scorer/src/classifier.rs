//! Pick a type profile for a set of answers.

use anju_core::{AnswerMap, FALLBACK_TYPE_NO, TypeProfile};
use log::debug;

use crate::extract::{TokenList, extract_tokens};

#[derive(Debug, Clone, Copy)]
struct Candidate {
    type_no: i64,
    score: i64,
}

impl Candidate {
    const FALLBACK: Self = Self {
        type_no: FALLBACK_TYPE_NO,
        score: -1,
    };

    const fn beats(self, best: Self) -> bool {
        self.score > best.score || (self.score == best.score && self.type_no < best.type_no)
    }
}

fn score_profile(tokens: &TokenList, profile: &TypeProfile) -> i64 {
    i64::try_from(tokens.matches_in(&profile.core_combo)).unwrap_or(i64::MAX)
}

/// Return the `type_no` of the profile that best matches `answers`.
///
/// A profile scores one point for every extracted token (counting repeats)
/// found in its `core_combo`. The best candidate starts as type `1` with a
/// score of `-1`; a profile replaces it when it scores strictly higher, or
/// equally with a smaller `type_no`. The catalogue is not re-sorted.
///
/// An empty catalogue yields [`FALLBACK_TYPE_NO`].
///
/// # Examples
/// ```
/// use anju_core::{AnswerMap, TypeProfile};
/// use anju_scorer::classify;
///
/// let answers = AnswerMap::new().with_answer(2, "행복");
/// let profiles = vec![
///     TypeProfile::new(7, "행복한 소주", "행복, 소주"),
///     TypeProfile::new(3, "행복한 맥주", "행복, 맥주"),
/// ];
/// assert_eq!(classify(&answers, &profiles), 3);
/// assert_eq!(classify(&answers, &[]), 1);
/// ```
#[must_use]
pub fn classify(answers: &AnswerMap, profiles: &[TypeProfile]) -> i64 {
    let tokens = extract_tokens(answers);
    let best = profiles
        .iter()
        .map(|profile| Candidate {
            type_no: profile.type_no,
            score: score_profile(&tokens, profile),
        })
        .fold(Candidate::FALLBACK, |best, candidate| {
            if candidate.beats(best) {
                candidate
            } else {
                best
            }
        });
    debug!(
        "classified answers as type {} (score {}, {} tokens)",
        best.type_no,
        best.score,
        tokens.len()
    );
    best.type_no
}
