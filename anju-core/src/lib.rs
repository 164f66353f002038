//! Core domain types for the Anju pairing quiz.
//!
//! The crate holds the reference records loaded from the quiz catalogues,
//! the answer map collected during a session, the preference flags derived
//! from answers, and the [`DishScorer`] seam used by the recommender. It
//! performs no I/O; loading lives in `anju-data` and scoring in
//! `anju-scorer`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod answers;
mod catalog;
mod preference;
mod recommendation;
mod scorer;
mod session;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use answers::AnswerMap;
pub use catalog::{
    DEFAULT_IMAGE_BASE, DEFAULT_PART_LABEL, DishRecord, ImageMap, Question, TypeProfile,
};
pub use preference::{AnswerSlot, DrinkCategory, PreferenceFlags};
pub use recommendation::{MAX_PAIRINGS, MAX_RECOMMENDED_ITEMS, Recommendation};
pub use scorer::DishScorer;
pub use session::{Advance, Progress, QuizSession, SessionError};

/// Fallback type identifier returned when no profile is selected.
pub const FALLBACK_TYPE_NO: i64 = 1;
