//! Point-in-time values read from the store.

use serde_json::Value;

/// The full value of a store path at a point in time, or its absence.
///
/// A JSON `null` from the wire is normalized to absence at
/// construction: the store never distinguishes "present and null" from
/// "not there" (deleting a path and writing `null` to it are the same
/// operation).
///
/// # Example
///
/// ```
/// use recetario_store::Snapshot;
/// use serde_json::json;
///
/// let snap = Snapshot::of(json!({"a": 1}));
/// assert!(snap.exists());
///
/// let gone = Snapshot::of(serde_json::Value::Null);
/// assert!(!gone.exists());
/// assert_eq!(gone, Snapshot::absent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    value: Option<Value>,
}

impl Snapshot {
    /// Creates a snapshot of an existing value. `Value::Null` is
    /// normalized to absence.
    #[must_use]
    pub fn of(value: Value) -> Self {
        match value {
            Value::Null => Self::absent(),
            value => Self { value: Some(value) },
        }
    }

    /// Creates a snapshot of an absent path.
    #[must_use]
    pub fn absent() -> Self {
        Self { value: None }
    }

    /// Returns `true` if the path existed when the snapshot was taken.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the value, or `None` for an absent path.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consumes the snapshot and returns the value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_absent() {
        assert_eq!(Snapshot::of(Value::Null), Snapshot::absent());
        assert!(!Snapshot::of(Value::Null).exists());
    }

    #[test]
    fn value_roundtrip() {
        let snap = Snapshot::of(json!({"name": "Soup"}));
        assert!(snap.exists());
        assert_eq!(snap.value(), Some(&json!({"name": "Soup"})));
        assert_eq!(snap.into_value(), Some(json!({"name": "Soup"})));
    }

    #[test]
    fn absent_has_no_value() {
        let snap = Snapshot::absent();
        assert_eq!(snap.value(), None);
        assert_eq!(snap.into_value(), None);
    }
}
