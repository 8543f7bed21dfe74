use crate::constants::{
    ALERT_SEPARATOR, ECHO_PREFIX, FETCH_FAILED_MESSAGE, NO_ALERTS_MESSAGE, NO_DESCRIPTION,
    NO_INSTRUCTIONS, UNKNOWN,
};
use crate::models::{AlertFeature, AlertResponse};

/// Formats one alert into five labeled lines, substituting defaults for absent fields
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        props.event.as_deref().unwrap_or(UNKNOWN),
        props.area_desc.as_deref().unwrap_or(UNKNOWN),
        props.severity.as_deref().unwrap_or(UNKNOWN),
        props.description.as_deref().unwrap_or(NO_DESCRIPTION),
        props.instruction.as_deref().unwrap_or(NO_INSTRUCTIONS),
    )
}

/// Turns a provider response (or the lack of one) into the final answer.
///
/// The checks run in a fixed order: a failed fetch and a response without
/// `features` both read as a fetch failure, before the empty-list case is
/// considered (`"features": null` counts as empty). Alerts keep the order the
/// provider sent them in.
pub fn summarize_alerts(response: Option<AlertResponse>) -> String {
    let Some(features) = response.and_then(|r| r.features) else {
        return FETCH_FAILED_MESSAGE.to_string();
    };

    if features.is_empty() {
        return NO_ALERTS_MESSAGE.to_string();
    }

    features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(ALERT_SEPARATOR)
}

pub fn format_echo(message: &str) -> String {
    format!("{ECHO_PREFIX}{message}")
}
