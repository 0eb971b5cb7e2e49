//! Tagged per-field changes for partial updates.

use serde::{Deserialize, Serialize};

/// A single field of a partial update.
///
/// `Unchanged` leaves the stored value untouched. `SetTo` replaces it. For
/// optional fields the payload is itself an `Option`, and `SetTo(None)`
/// removes the field from the stored document, so "leave alone" and "clear"
/// are never confused.
///
/// On the JSON surface an absent key deserializes to `Unchanged` and a present
/// key (including `null`) to `SetTo`; pair this with
/// `#[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    SetTo(T),
}

impl<T> FieldUpdate<T> {
    /// Returns `true` if the field is left untouched.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Map the new value, keeping `Unchanged` as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            Self::Unchanged => FieldUpdate::Unchanged,
            Self::SetTo(value) => FieldUpdate::SetTo(f(value)),
        }
    }
}

impl<T> From<T> for FieldUpdate<T> {
    fn from(value: T) -> Self {
        Self::SetTo(value)
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Only reached when the containing field forgot skip_serializing_if
            Self::Unchanged => serializer.serialize_none(),
            Self::SetTo(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::SetTo)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
        name: FieldUpdate<String>,
        #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
        price: FieldUpdate<Option<String>>,
    }

    #[test]
    fn test_absent_key_is_unchanged() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_unchanged());
        assert!(patch.price.is_unchanged());
    }

    #[test]
    fn test_null_clears_optional_field() {
        let patch: Patch = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert_eq!(patch.price, FieldUpdate::SetTo(None));
    }

    #[test]
    fn test_present_value_is_set() {
        let patch: Patch = serde_json::from_str(r#"{"name": "Reja", "price": "$10"}"#).unwrap();
        assert_eq!(patch.name, FieldUpdate::SetTo("Reja".to_string()));
        assert_eq!(patch.price, FieldUpdate::SetTo(Some("$10".to_string())));
    }

    #[test]
    fn test_serialize_skips_unchanged() {
        let patch = Patch {
            name: FieldUpdate::Unchanged,
            price: FieldUpdate::SetTo(None),
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"price":null}"#);
    }
}
