use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// National Weather Service API Models
// ============================================================================

/// Envelope of `/alerts/active/area/{code}`.
///
/// `None` only when the `features` key is missing. A `null` list reads as an
/// empty one.
#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    #[serde(default, deserialize_with = "present_or_empty")]
    pub features: Option<Vec<AlertFeature>>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: AlertProperties,
}

/// Alert fields shown to the caller. Non-string values are kept in their JSON
/// text form so one odd field never discards the whole response.
#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default, deserialize_with = "lenient_text")]
    pub event: Option<String>,
    #[serde(rename = "areaDesc", default, deserialize_with = "lenient_text")]
    pub area_desc: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub instruction: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn present_or_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    null_as_default(deserializer).map(Some)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

// ============================================================================
// Surface Request/Response Models
// ============================================================================

/// Argument of the `get_alerts` tool and body of `POST /get_alerts`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

/// Body of `POST /echo`
#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: String,
}

/// Envelope returned by every HTTP endpoint
#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub result: String,
}
