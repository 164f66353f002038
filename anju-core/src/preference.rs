//! Answer slots read by the scoring engine and the preference flags derived
//! from them.

use std::collections::BTreeSet;

/// The five questions whose answers drive classification and ranking.
///
/// # Examples
/// ```
/// use anju_core::AnswerSlot;
///
/// assert_eq!(AnswerSlot::Flavour.question_no(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnswerSlot {
    /// Today's weather.
    Weather,
    /// Current mood.
    Mood,
    /// Drink of choice.
    Drink,
    /// Preferred flavour.
    Flavour,
    /// Preferred cooking style.
    Cook,
}

impl AnswerSlot {
    /// Question number the slot reads.
    #[must_use]
    pub const fn question_no(self) -> u32 {
        match self {
            Self::Weather => 1,
            Self::Mood => 2,
            Self::Drink => 5,
            Self::Flavour => 11,
            Self::Cook => 12,
        }
    }
}

/// Drink families used both to read the drink answer and to match a dish's
/// preferred pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrinkCategory {
    /// Soju.
    Soju,
    /// Beer.
    Beer,
    /// Makgeolli (rice wine).
    Makgeolli,
    /// Wine and cocktails.
    Wine,
}

impl DrinkCategory {
    /// Every category in declaration order.
    pub const ALL: [Self; 4] = [Self::Soju, Self::Beer, Self::Makgeolli, Self::Wine];

    /// Substrings that identify the category in free text.
    #[must_use]
    pub const fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Soju => &["소주"],
            Self::Beer => &["맥주"],
            Self::Makgeolli => &["막걸리"],
            Self::Wine => &["와인", "칵테일"],
        }
    }

    /// Canonical classification token for the category.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Soju => "소주",
            Self::Beer => "맥주",
            Self::Makgeolli => "막걸리",
            Self::Wine => "와인",
        }
    }

    /// Whether any trigger occurs in `text`.
    ///
    /// # Examples
    /// ```
    /// use anju_core::DrinkCategory;
    ///
    /// assert!(DrinkCategory::Wine.matches("하우스 칵테일"));
    /// assert!(!DrinkCategory::Beer.matches("소주"));
    /// ```
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        self.triggers().iter().any(|trigger| text.contains(trigger))
    }
}

/// Preferences derived from a participant's answers.
///
/// Built fresh for every recommendation; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceFlags {
    /// The flavour answer asked for something spicy.
    pub wants_spicy: bool,
    /// The cooking answer favoured fried or stir-fried food.
    pub prefers_fried: bool,
    /// The cooking answer favoured boiled food or soup.
    pub prefers_boiled: bool,
    drinks: BTreeSet<DrinkCategory>,
}

impl PreferenceFlags {
    /// Construct flags with nothing preferred.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a drink category as preferred.
    pub fn prefer_drink(&mut self, category: DrinkCategory) {
        self.drinks.insert(category);
    }

    /// Mark a drink category as preferred while returning `self`.
    #[must_use]
    pub fn with_drink(mut self, category: DrinkCategory) -> Self {
        self.prefer_drink(category);
        self
    }

    /// Whether the participant prefers `category`.
    #[must_use]
    pub fn prefers_drink(&self, category: DrinkCategory) -> bool {
        self.drinks.contains(&category)
    }

    /// Preferred drink categories in declaration order.
    pub fn drinks(&self) -> impl Iterator<Item = DrinkCategory> + '_ {
        self.drinks.iter().copied()
    }
}
