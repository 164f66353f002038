//! Reference records loaded once per session from the quiz catalogues.

use std::collections::HashMap;

/// Label shown when a question has no part/category.
pub const DEFAULT_PART_LABEL: &str = "파트";

/// Directory prefix prepended to image file names.
pub const DEFAULT_IMAGE_BASE: &str = "./images/";

/// Placeholder that spreadsheet exports use for blank cells.
const NAN_PLACEHOLDER: &str = "nan";

/// A single multiple-choice question.
///
/// Up to four raw option cells are kept as loaded; [`Question::options`]
/// filters out blanks and the `nan` placeholder.
///
/// # Examples
/// ```
/// use anju_core::Question;
///
/// let question = Question::new(1, "날씨", "오늘 날씨는?", ["화창한 날", "", "nan", "비 오는 날"]);
/// let options: Vec<&str> = question.options().collect();
/// assert_eq!(options, vec!["화창한 날", "비 오는 날"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// Ordering key and answer-map key.
    pub q_no: u32,
    /// Part or category label.
    pub part: String,
    /// Prompt text.
    pub question: String,
    /// Raw option cells, in sheet order.
    pub raw_options: Vec<String>,
}

impl Question {
    /// Construct a question from its cells.
    pub fn new<I, S>(
        q_no: u32,
        part: impl Into<String>,
        question: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            q_no,
            part: part.into(),
            question: question.into(),
            raw_options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Offered options, trimmed, with blanks and `nan` removed.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.raw_options
            .iter()
            .map(|option| option.trim())
            .filter(|option| !option.is_empty() && !option.eq_ignore_ascii_case(NAN_PLACEHOLDER))
    }

    /// Whether `text` is one of the offered options.
    #[must_use]
    pub fn offers(&self, text: &str) -> bool {
        self.options().any(|option| option == text)
    }

    /// Part label, falling back to [`DEFAULT_PART_LABEL`] when blank.
    #[must_use]
    pub fn part_label(&self) -> &str {
        let part = self.part.trim();
        if part.is_empty() {
            DEFAULT_PART_LABEL
        } else {
            part
        }
    }
}

/// A personality/type profile the classifier can select.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeProfile {
    /// Numeric identifier.
    pub type_no: i64,
    /// Display title.
    pub keyword: String,
    /// Free text of flavour, mood and weather keywords.
    pub core_combo: String,
}

impl TypeProfile {
    /// Construct a profile.
    pub fn new(type_no: i64, keyword: impl Into<String>, core_combo: impl Into<String>) -> Self {
        Self {
            type_no,
            keyword: keyword.into(),
            core_combo: core_combo.into(),
        }
    }
}

/// A dish ("anju") that can be recommended alongside drinks.
///
/// # Examples
/// ```
/// use anju_core::DishRecord;
///
/// let dish = DishRecord::new("감자튀김")
///     .fried()
///     .with_best_drink("맥주")
///     .with_alt_drinks("소주", "");
/// assert!(dish.is_fried);
/// assert_eq!(dish.pairings(), ["맥주", "소주", ""]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DishRecord {
    /// Display name; duplicates collapse during recommendation.
    pub name: String,
    /// Spiciness level; zero when unknown.
    pub spicy_level: u32,
    /// Soup or stew.
    pub is_soup: bool,
    /// Fried or stir-fried.
    pub is_fried: bool,
    /// Preferred pairing; the only field used for scoring.
    pub best_drink: String,
    /// First alternate pairing.
    pub alt_drink_1: String,
    /// Second alternate pairing.
    pub alt_drink_2: String,
}

impl DishRecord {
    /// Construct a dish with the given name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the spiciness level.
    #[must_use]
    pub const fn with_spicy_level(mut self, level: u32) -> Self {
        self.spicy_level = level;
        self
    }

    /// Mark the dish as a soup or stew.
    #[must_use]
    pub const fn soup(mut self) -> Self {
        self.is_soup = true;
        self
    }

    /// Mark the dish as fried.
    #[must_use]
    pub const fn fried(mut self) -> Self {
        self.is_fried = true;
        self
    }

    /// Set the preferred pairing.
    #[must_use]
    pub fn with_best_drink(mut self, drink: impl Into<String>) -> Self {
        self.best_drink = drink.into();
        self
    }

    /// Set both alternate pairings.
    #[must_use]
    pub fn with_alt_drinks(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.alt_drink_1 = first.into();
        self.alt_drink_2 = second.into();
        self
    }

    /// Pairing fields in suggestion order: preferred, then alternates.
    #[must_use]
    pub fn pairings(&self) -> [&str; 3] {
        [
            self.best_drink.as_str(),
            self.alt_drink_1.as_str(),
            self.alt_drink_2.as_str(),
        ]
    }
}

/// Mapping from question prompt text to an illustration file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ImageMap {
    images: HashMap<String, String>,
}

impl ImageMap {
    /// Construct an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping; both sides are trimmed and blank keys are ignored.
    ///
    /// Returns the file name previously mapped to the key, if any.
    pub fn insert(&mut self, prompt: &str, file_name: &str) -> Option<String> {
        let key = prompt.trim();
        if key.is_empty() {
            return None;
        }
        self.images
            .insert(key.to_owned(), file_name.trim().to_owned())
    }

    /// Return the image file name for a prompt, if one is mapped.
    ///
    /// Empty file names count as unmapped.
    ///
    /// # Examples
    /// ```
    /// use anju_core::ImageMap;
    ///
    /// let mut images = ImageMap::new();
    /// images.insert(" 오늘 날씨는? ", "weather.png");
    /// assert_eq!(images.image_for("오늘 날씨는?"), Some("weather.png"));
    /// assert_eq!(
    ///     images.image_path("오늘 날씨는?", anju_core::DEFAULT_IMAGE_BASE),
    ///     Some("./images/weather.png".to_owned()),
    /// );
    /// ```
    #[must_use]
    pub fn image_for(&self, prompt: &str) -> Option<&str> {
        self.images
            .get(prompt.trim())
            .map(String::as_str)
            .filter(|file| !file.is_empty())
    }

    /// Return `base` joined with the mapped file name.
    #[must_use]
    pub fn image_path(&self, prompt: &str, base: &str) -> Option<String> {
        self.image_for(prompt).map(|file| format!("{base}{file}"))
    }

    /// Number of mapped prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
