/// User agent string sent with every provider request
pub const USER_AGENT: &str = "weather-app/1.0";

/// Content type requested from the provider
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Upper bound for a single provider request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default bind address of the HTTP surface
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8000";

pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ALERTS_MESSAGE: &str = "No active alerts for this state.";

/// Line placed between two formatted alerts
pub const ALERT_SEPARATOR: &str = "\n---\n";

pub const UNKNOWN: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_INSTRUCTIONS: &str = "No specific instructions provided";

/// URI scheme and template of the echo resource
pub const ECHO_URI_PREFIX: &str = "echo://";
pub const ECHO_URI_TEMPLATE: &str = "echo://{message}";
pub const ECHO_PREFIX: &str = "Resource echo: ";
