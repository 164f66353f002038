//! Catalogue loading for the Anju pairing quiz.
//!
//! Responsibilities:
//! - Read the question, type-profile, dish and image-mapping catalogues
//!   from JSON row exports.
//! - Normalise loosely typed spreadsheet cells into the strongly typed
//!   records of `anju-core`, defaulting unparsable numbers to zero and
//!   absent text to the empty string.
//! - Apply load-time ordering: questions by `q_no`, profiles by `type_no`.
//!
//! Boundaries:
//! - Do not encode scoring rules (they live in `anju-scorer`).
//!
//! Invariants:
//! - No global state; every call returns freshly owned catalogues.

#![forbid(unsafe_code)]

pub mod cell;
mod error;
mod loader;
mod rows;

pub use cell::{Cell, parse_number_or_zero};
pub use error::CatalogError;
pub use loader::{
    CatalogPaths, Catalogs, DISHES_FILE, IMAGES_FILE, QUESTIONS_FILE, TYPES_FILE, load_answers,
    load_catalogs, load_dishes, load_images, load_questions, load_type_profiles,
};
pub use rows::{DishRow, ImageRow, QuestionRow, TypeProfileRow};

#[cfg(test)]
mod tests;
