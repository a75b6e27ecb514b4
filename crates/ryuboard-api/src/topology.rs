// Topology endpoints
//
// Passthrough of the controller's topology discovery: switches, links and
// hosts as the controller serializes them.

use serde_json::Value;
use tracing::debug;

use crate::client::RyuClient;
use crate::error::Error;

impl RyuClient {
    /// List OpenFlow switches known to the controller.
    ///
    /// `GET /topology/switches`
    pub async fn get_switches(&self) -> Result<Value, Error> {
        debug!("listing switches");
        self.get("/topology/switches").await
    }

    /// List discovered inter-switch links.
    ///
    /// `GET /topology/links`
    pub async fn get_links(&self) -> Result<Value, Error> {
        debug!("listing links");
        self.get("/topology/links").await
    }

    /// List hosts seen at switch edge ports.
    ///
    /// `GET /topology/hosts`
    pub async fn get_hosts(&self) -> Result<Value, Error> {
        debug!("listing hosts");
        self.get("/topology/hosts").await
    }
}
