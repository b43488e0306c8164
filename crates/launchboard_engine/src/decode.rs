use serde::{Deserialize, Deserializer};

use crate::{FailureKind, FetchError};

/// One entry of the launches endpoint. Fields the table does not show are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiLaunch {
    pub flight_number: u32,
    pub mission_name: String,
    pub rocket: ApiRocket,
    #[serde(deserialize_with = "year_as_string")]
    pub launch_year: String,
    #[serde(default)]
    pub launch_success: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiRocket {
    pub rocket_name: String,
}

/// Parse a response body as a JSON array of launches.
pub fn decode_launches(bytes: &[u8]) -> Result<Vec<ApiLaunch>, FetchError> {
    serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}

// The v3 API sends the year as a string; accept a bare number too.
fn year_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(u64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(text) => text,
        Year::Number(number) => number.to_string(),
    })
}
