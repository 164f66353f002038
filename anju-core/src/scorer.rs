//! Score dishes against a participant's preferences.
//!
//! The `DishScorer` trait assigns a ranking score to a
//! [`DishRecord`](crate::DishRecord) given the
//! [`PreferenceFlags`](crate::PreferenceFlags) derived from the answers.

use crate::{DishRecord, PreferenceFlags};

/// Calculate a ranking score for a dish.
///
/// Higher scores rank earlier. Implementations must be thread-safe
/// (`Send` + `Sync`) and deterministic: the same dish and flags must always
/// yield the same score. The method is infallible; return `0` when nothing
/// matches.
///
/// # Examples
///
/// ```rust
/// use anju_core::{DishRecord, DishScorer, PreferenceFlags};
///
/// struct FriedOnly;
///
/// impl DishScorer for FriedOnly {
///     fn score(&self, dish: &DishRecord, _preferences: &PreferenceFlags) -> u32 {
///         u32::from(dish.is_fried)
///     }
/// }
///
/// let dish = DishRecord::new("치킨").fried();
/// assert_eq!(FriedOnly.score(&dish, &PreferenceFlags::new()), 1);
/// ```
pub trait DishScorer: Send + Sync {
    /// Return a score for `dish` according to `preferences`.
    fn score(&self, dish: &DishRecord, preferences: &PreferenceFlags) -> u32;
}

impl<S: DishScorer + ?Sized> DishScorer for &S {
    fn score(&self, dish: &DishRecord, preferences: &PreferenceFlags) -> u32 {
        (**self).score(dish, preferences)
    }
}
