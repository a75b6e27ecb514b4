// Whitelist / blacklist endpoints.

use serde_json::Value;
use tracing::debug;

use crate::client::RyuClient;
use crate::error::Error;
use crate::models::{ListEntry, ListType};

impl RyuClient {
    /// Fetch both MAC lists.
    ///
    /// `GET /lists`
    pub async fn get_lists(&self) -> Result<Value, Error> {
        debug!("fetching lists");
        self.get("/lists").await
    }

    /// Add a MAC to a list.
    ///
    /// `POST /lists/add` with `{"type": ..., "mac": ...}`
    pub async fn add_to_list(&self, list_type: ListType, mac: &str) -> Result<Value, Error> {
        debug!(%list_type, mac, "adding list entry");
        self.post("/lists/add", &ListEntry::new(list_type, mac)).await
    }

    /// Remove a MAC from a list.
    ///
    /// `POST /lists/remove` with `{"type": ..., "mac": ...}`
    pub async fn remove_from_list(&self, list_type: ListType, mac: &str) -> Result<Value, Error> {
        debug!(%list_type, mac, "removing list entry");
        self.post("/lists/remove", &ListEntry::new(list_type, mac)).await
    }
}
