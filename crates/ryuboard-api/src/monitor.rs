// Detection and traffic monitoring endpoints.

use serde_json::Value;
use tracing::debug;

use crate::client::RyuClient;
use crate::error::Error;

impl RyuClient {
    /// Fetch current DDoS alerts.
    ///
    /// `GET /alerts`
    pub async fn get_alerts(&self) -> Result<Value, Error> {
        debug!("fetching alerts");
        self.get("/alerts").await
    }

    /// Fetch the rolling traffic-rate history.
    ///
    /// `GET /traffic-stats`
    pub async fn get_traffic_stats(&self) -> Result<Value, Error> {
        debug!("fetching traffic stats");
        self.get("/traffic-stats").await
    }
}
