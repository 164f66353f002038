//! Scoring engine for the Anju pairing quiz.
//!
//! The crate turns a finished [`AnswerMap`](anju_core::AnswerMap) into two
//! results:
//! - **Classification** picks a single type profile by counting how many
//!   canonical tokens extracted from the answers appear in each profile's
//!   core-combination text. Ties go to the smallest identifier.
//! - **Recommendation** ranks the dish catalogue with a
//!   [`DishScorer`](anju_core::DishScorer), keeps the first five distinct
//!   names, and gathers up to five distinct drink pairings from them.
//!
//! Both operations are pure: they never fail, never allocate shared state,
//! and return identical output for identical input.
//!
//! # Examples
//!
//! ```
//! use anju_core::{AnswerMap, DishRecord, TypeProfile};
//! use anju_scorer::{classify, recommend};
//!
//! let answers = AnswerMap::new()
//!     .with_answer(5, "맥주")
//!     .with_answer(12, "튀기거나 볶은 음식");
//! let profiles = vec![
//!     TypeProfile::new(1, "차분한 막걸리파", "막걸리, 차분"),
//!     TypeProfile::new(2, "바삭한 맥주파", "맥주, 튀김"),
//! ];
//! let dishes = vec![
//!     DishRecord::new("두부김치").with_best_drink("막걸리"),
//!     DishRecord::new("치킨").fried().with_best_drink("맥주"),
//! ];
//!
//! assert_eq!(classify(&answers, &profiles), 2);
//! let recommendation = recommend(&answers, &dishes);
//! assert_eq!(recommendation.items, vec!["치킨", "두부김치"]);
//! assert_eq!(recommendation.pairings, vec!["맥주", "막걸리"]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod classifier;
mod extract;
mod outcome;
mod recommender;
mod rules;

pub use classifier::classify;
pub use extract::{TokenList, extract_preferences, extract_tokens};
pub use outcome::{DEFAULT_SUBTITLE, DEFAULT_TITLE, QuizOutcome, evaluate};
pub use recommender::{
    BOILED_BONUS, DRINK_MATCH_BONUS, FRIED_BONUS, PreferenceScorer, Recommender, SPICE_MULTIPLIER,
    recommend,
};
