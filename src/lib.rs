//! Facade crate for the Anju pairing quiz engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes catalogue loading behind the `loader` feature.
//!
//! ```
//! use anju_engine::{AnswerMap, DishRecord, TypeProfile, evaluate};
//!
//! let answers = AnswerMap::new().with_answer(5, "막걸리");
//! let profiles = [TypeProfile::new(2, "비 오는 날 막걸리", "비, 막걸리")];
//! let dishes = [DishRecord::new("파전").with_best_drink("막걸리")];
//! let outcome = evaluate(&answers, &profiles, &dishes);
//! assert_eq!(outcome.type_no, 2);
//! assert_eq!(outcome.dishes, vec!["파전"]);
//! ```

#![forbid(unsafe_code)]

pub use anju_core::{
    Advance, AnswerMap, AnswerSlot, DEFAULT_IMAGE_BASE, DishRecord, DishScorer, DrinkCategory,
    FALLBACK_TYPE_NO, ImageMap, MAX_PAIRINGS, MAX_RECOMMENDED_ITEMS, PreferenceFlags, Progress,
    Question, QuizSession, Recommendation, SessionError, TypeProfile,
};
pub use anju_scorer::{
    PreferenceScorer, QuizOutcome, Recommender, classify, evaluate, extract_preferences,
    extract_tokens, recommend,
};

#[cfg(feature = "loader")]
pub use anju_data::{CatalogError, CatalogPaths, Catalogs, load_answers, load_catalogs};
