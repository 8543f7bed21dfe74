use crate::client::NwsClient;
use crate::formatters::{format_echo, summarize_alerts};
use crate::models::AlertResponse;

/// The operations shared by the MCP and HTTP surfaces.
///
/// Both surfaces call these methods and only differ in how they wrap the
/// returned string. Neither method can fail: every path ends in a textual answer.
pub struct AlertGateway {
    client: NwsClient,
}

impl AlertGateway {
    pub fn new(client: NwsClient) -> Self {
        Self { client }
    }

    /// Active alerts for a region code, formatted for reading
    pub async fn get_alerts(&self, state: &str) -> String {
        let url = self.client.alerts_url(state);
        let data = self.client.fetch_json::<AlertResponse>(&url).await;
        summarize_alerts(data)
    }

    pub fn echo(&self, message: &str) -> String {
        format_echo(message)
    }
}
