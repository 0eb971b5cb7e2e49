//! Star rating for best-seller entries.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "rating must be between {min} and {max} (got {value})",
    min = Rating::MIN,
    max = Rating::MAX
)]
pub struct RatingError {
    /// The rejected value.
    pub value: i64,
}

/// A whole-star rating from 1 to 5.
///
/// Editors pick the rating from a fixed list, so out-of-range values cannot be
/// submitted through a form. Values read back from the store are not trusted
/// and go through [`Rating::clamped`].
///
/// ## Examples
///
/// ```
/// use herreria_core::Rating;
///
/// assert_eq!(Rating::new(4).map(Rating::get), Ok(4));
/// assert!(Rating::new(0).is_err());
/// assert_eq!(Rating::clamped(9).get(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Lowest selectable rating.
    pub const MIN: u8 = 1;
    /// Highest selectable rating.
    pub const MAX: u8 = 5;

    /// Parse a rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if the value is outside 1..=5.
    pub fn new(value: i64) -> Result<Self, RatingError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(RatingError { value })
    }

    /// Build a rating, forcing the value into 1..=5.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // bounded is within 1..=5, so the conversion cannot fail
        Self(u8::try_from(bounded).unwrap_or(Self::MAX))
    }

    /// The number of stars.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Label used by the rating selector ("1 estrella", "3 estrellas").
    #[must_use]
    pub fn label(self) -> String {
        if self.0 > 1 {
            format!("{} estrellas", self.0)
        } else {
            format!("{} estrella", self.0)
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        Self::from(rating.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
