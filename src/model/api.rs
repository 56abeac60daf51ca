use serde::{
    de::{value::StringDeserializer, DeserializeOwned, IntoDeserializer},
    Deserialize, Deserializer, Serialize,
};
use utoipa::ToSchema;

/// Body returned when a request is rejected before reaching the database.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Outcome of a write operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

impl SuccessDto {
    pub fn ok() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}

/// Wrapper used by the reporting endpoints: `{ "data": [[...], ...] }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataDto<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for DataDto<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Row count, `-1` when the count could not be taken.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CountDto {
    pub success: bool,
    pub count: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// Reads an optional numeric field sent either as a JSON number or as its text.
///
/// Form inputs post every value as a string, so `"5"` and `5` are both accepted. A blank
/// string counts as a missing value and non-numeric text is rejected.
///
/// # Returns
/// - `Ok(Some(T))` - Parsed number
/// - `Ok(None)` - Field was null or blank
/// - `Err(D::Error)` - Text that does not parse as `T`
pub(crate) fn deserialize_optional_number<'de, D, T>(
    deserializer: D,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + std::str::FromStr,
    T::Err: std::fmt::Display,
{
    use serde::de::Error;

    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }

            text.parse::<T>().map(Some).map_err(D::Error::custom)
        }
    }
}

/// Reads an optional one-letter code, treating a blank string as missing.
pub(crate) fn deserialize_optional_code<'de, D, T>(
    deserializer: D,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(code) if code.trim().is_empty() => Ok(None),
        Some(code) => {
            let code: StringDeserializer<D::Error> = code.into_deserializer();
            T::deserialize(code).map(Some)
        }
    }
}
