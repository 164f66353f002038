//! Raw catalogue rows keyed by the exported sheet's column names.
//!
//! Every column is optional; conversion into `anju-core` records applies
//! the tolerant defaults from [`Cell`].

use anju_core::{DishRecord, Question, TypeProfile};
use serde::Deserialize;

use crate::Cell;

/// A row of the question sheet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuestionRow {
    /// Ordering key.
    pub q_no: Cell,
    /// Part label.
    pub part: Cell,
    /// Prompt text.
    pub question: Cell,
    /// First option.
    pub option_1: Cell,
    /// Second option.
    pub option_2: Cell,
    /// Third option.
    pub option_3: Cell,
    /// Fourth option.
    pub option_4: Cell,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self::new(
            row.q_no.count(),
            row.part.text(),
            row.question.text(),
            [row.option_1, row.option_2, row.option_3, row.option_4].map(|cell| cell.text()),
        )
    }
}

/// A row of the type-profile sheet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypeProfileRow {
    /// Identifier.
    pub type_no: Cell,
    /// Display title.
    pub keyword: Cell,
    /// Core keyword combination.
    pub core_combo: Cell,
}

impl From<TypeProfileRow> for TypeProfile {
    fn from(row: TypeProfileRow) -> Self {
        Self::new(row.type_no.number(), row.keyword.text(), row.core_combo.text())
    }
}

/// A row of the dish sheet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DishRow {
    /// Dish name.
    pub name: Cell,
    /// Spiciness level.
    pub spicy_level: Cell,
    /// `1` for soups and stews.
    pub is_soup: Cell,
    /// `1` for fried dishes.
    pub is_fried: Cell,
    /// Preferred pairing.
    pub best_drink: Cell,
    /// First alternate pairing.
    pub alt_drink_1: Cell,
    /// Second alternate pairing.
    pub alt_drink_2: Cell,
}

impl From<DishRow> for DishRecord {
    fn from(row: DishRow) -> Self {
        Self {
            name: row.name.text(),
            spicy_level: row.spicy_level.count(),
            is_soup: row.is_soup.flag(),
            is_fried: row.is_fried.flag(),
            best_drink: row.best_drink.text(),
            alt_drink_1: row.alt_drink_1.text(),
            alt_drink_2: row.alt_drink_2.text(),
        }
    }
}

/// A row of the image-mapping sheet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageRow {
    /// Exact prompt text of the illustrated question.
    pub item_name: Cell,
    /// Image file name relative to the image directory.
    pub image_filename: Cell,
}
