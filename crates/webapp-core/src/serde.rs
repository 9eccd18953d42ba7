use serde::Serializer;

/// Placeholder written wherever a secret would otherwise be printed.
pub const REDACTED: &str = "[REDACTED]";

/// Serialize any field as [`REDACTED`].
///
/// Used with `#[serde(serialize_with = "...")]` on secrets so `show`-style
/// dumps of the settings never leak credentials.
pub fn redacted<T, S>(_value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ?Sized,
    S: Serializer,
{
    serializer.serialize_str(REDACTED)
}

pub fn redacted_opt<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(_) => serializer.serialize_str(REDACTED),
        None => serializer.serialize_none(),
    }
}
