//! In-process stand-in for the NWS alerts endpoint.
//!
//! The region code picks the canned answer:
//!
//! | Code | Answer |
//! |------|--------|
//! | `CA` | two alerts, the second with no optional fields |
//! | `NY` | empty `features` |
//! | `NJ` | `features` set to `null` |
//! | `WA` | valid document without `features` |
//! | `TX` | `500` |
//! | `FL` | `200` with a non-JSON body |
//! | `SLOW` | empty `features` after five seconds |
//! | other | `400`, like the real provider for unknown areas |

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::header::{HeaderName, ACCEPT, USER_AGENT};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use crate::client::NwsClient;
use crate::constants;
use crate::gateway::AlertGateway;

async fn alerts(Path(state): Path<String>, headers: HeaderMap) -> Response {
    let header = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok());
    if header(USER_AGENT) != Some(constants::USER_AGENT)
        || header(ACCEPT) != Some(constants::ACCEPT_GEO_JSON)
    {
        return StatusCode::FORBIDDEN.into_response();
    }

    match state.as_str() {
        "CA" => Json(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "id": "urn:oid:2.49.0.1.840.0.1",
                    "properties": {
                        "event": "Red Flag Warning",
                        "areaDesc": "Los Padres National Forest",
                        "severity": "Severe",
                        "description": "Gusty winds and low humidity.",
                        "instruction": "Avoid outdoor burning."
                    }
                },
                { "properties": {} }
            ]
        }))
        .into_response(),
        "NY" => Json(json!({"type": "FeatureCollection", "features": []})).into_response(),
        "NJ" => Json(json!({"type": "FeatureCollection", "features": null})).into_response(),
        "WA" => Json(json!({"type": "FeatureCollection", "title": "No features key"})).into_response(),
        "TX" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "FL" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "SLOW" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"features": []})).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"title": "Bad Request", "detail": "Invalid area"})),
        )
            .into_response(),
    }
}

/// Starts the mock provider on an ephemeral port and returns its base URL
pub async fn spawn_provider() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/alerts/active/area/:state", get(alerts));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Gateway wired to a fresh mock provider
pub async fn mock_gateway() -> Arc<AlertGateway> {
    let base = spawn_provider().await;
    let client = NwsClient::new(&base, Duration::from_secs(5)).unwrap();
    Arc::new(AlertGateway::new(client))
}
