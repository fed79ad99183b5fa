use serde::{Deserialize, Deserializer};

/// Reads a JSON `null` as the default value of the field's type. Any other value must
/// still match the type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
