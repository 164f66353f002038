//! Property-based tests for classification and recommendation.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! answer map and catalogue, complementing the unit and behaviour tests.
//!
//! # Invariants tested
//!
//! - **Known identifier:** `classify` returns a catalogue identifier, or `1`
//!   for an empty catalogue.
//! - **Caps:** recommendations never exceed five items or five pairings.
//! - **Distinct output:** item names and pairings are unique and non-empty.
//! - **Determinism:** repeated calls return identical results.

use std::collections::HashSet;

use anju_core::{AnswerMap, DishRecord, TypeProfile};
use anju_scorer::{classify, recommend};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "화창", "비", "눈", "흐리", "춥", "행복", "스트레스", "차분", "아쉽", "소주", "맥주", "막걸리",
    "와인", "칵테일", "매콤", "얼큰", "달콤", "시원", "고소", "튀기", "볶", "구운", "끓", "삶",
    "날것", " ", "",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..4).prop_map(|parts| parts.concat())
}

fn answers_strategy() -> impl Strategy<Value = AnswerMap> {
    prop::collection::vec(
        (prop::sample::select(vec![1_u32, 2, 3, 5, 11, 12]), text_strategy()),
        0..6,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

fn profile_strategy() -> impl Strategy<Value = TypeProfile> {
    (-3_i64..20, text_strategy())
        .prop_map(|(type_no, combo)| TypeProfile::new(type_no, format!("유형 {type_no}"), combo))
}

fn dish_strategy() -> impl Strategy<Value = DishRecord> {
    (
        prop::sample::select(vec!["치킨", "파전", "닭발", "어묵탕", " ", "", "골뱅이"]),
        0_u32..6,
        any::<bool>(),
        any::<bool>(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
    )
        .prop_map(|(name, spicy, soup, fried, best, alt1, alt2)| DishRecord {
            name: name.to_owned(),
            spicy_level: spicy,
            is_soup: soup,
            is_fried: fried,
            best_drink: best,
            alt_drink_1: alt1,
            alt_drink_2: alt2,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the selected type is always a catalogue identifier, or the
    /// fallback when the catalogue is empty.
    #[test]
    fn classify_returns_known_identifier(
        answers in answers_strategy(),
        profiles in prop::collection::vec(profile_strategy(), 0..8),
    ) {
        let selected = classify(&answers, &profiles);
        if profiles.is_empty() {
            prop_assert_eq!(selected, 1);
        } else {
            prop_assert!(profiles.iter().any(|profile| profile.type_no == selected));
        }
    }

    /// Property: recommendations respect the caps and contain no duplicates or
    /// blank entries.
    #[test]
    fn recommend_output_is_capped_and_distinct(
        answers in answers_strategy(),
        dishes in prop::collection::vec(dish_strategy(), 0..20),
    ) {
        let result = recommend(&answers, &dishes);
        prop_assert!(result.items.len() <= 5);
        prop_assert!(result.pairings.len() <= 5);

        let names: HashSet<&str> = result.items.iter().map(String::as_str).collect();
        prop_assert_eq!(names.len(), result.items.len());
        prop_assert!(result.items.iter().all(|name| !name.is_empty()));

        let drinks: HashSet<&str> = result.pairings.iter().map(String::as_str).collect();
        prop_assert_eq!(drinks.len(), result.pairings.len());
        prop_assert!(result.pairings.iter().all(|drink| !drink.is_empty()));
    }

    /// Property: identical inputs always produce identical outputs.
    #[test]
    fn scoring_is_deterministic(
        answers in answers_strategy(),
        profiles in prop::collection::vec(profile_strategy(), 0..8),
        dishes in prop::collection::vec(dish_strategy(), 0..20),
    ) {
        prop_assert_eq!(classify(&answers, &profiles), classify(&answers, &profiles));
        prop_assert_eq!(recommend(&answers, &dishes), recommend(&answers, &dishes));
    }
}
