// Wire types for the Ryu DDoS web controller.
//
// `ListType` and `ListEntry` are request-side and always used. The payload
// models below them are opt-in views of what the controller is known to
// return; accessors hand back raw JSON and never apply them.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Which MAC list an entry belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListType {
    Whitelist,
    Blacklist,
}

/// Body of `POST /lists/add` and `POST /lists/remove`.
///
/// Serializes to exactly `{"type": ..., "mac": ...}`. The MAC is an opaque
/// identifier and is sent as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    #[serde(rename = "type")]
    pub list_type: ListType,
    pub mac: String,
}

impl ListEntry {
    pub fn new(list_type: ListType, mac: impl Into<String>) -> Self {
        Self {
            list_type,
            mac: mac.into(),
        }
    }
}

// ── Known response shapes ────────────────────────────────────────────

/// Decode a raw accessor result into one of the typed views.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    let body = value.to_string();
    serde_json::from_value(value).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}

/// `GET /alerts`: current blacklist plus per-attacker detection data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertReport {
    #[serde(default)]
    pub blacklist: Vec<String>,
    /// Keyed by attacker source MAC.
    #[serde(default)]
    pub alerts: BTreeMap<String, Alert>,
}

/// A single detection: packet rate over the last sampling window and the
/// datapath that observed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub pps: f64,
    pub dpid: u64,
}

/// One point of `GET /traffic-stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSample {
    /// Wall-clock `HH:MM:SS` on the controller.
    pub time: String,
    pub pps: f64,
}

/// `GET /lists`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    #[serde(default)]
    pub blacklist: Vec<String>,
    #[serde(default)]
    pub whitelist: Vec<String>,
}

impl ListSnapshot {
    /// Flatten into `(type, mac)` entries, blacklist first.
    pub fn entries(&self) -> Vec<ListEntry> {
        self.blacklist
            .iter()
            .map(|mac| ListEntry::new(ListType::Blacklist, mac.clone()))
            .chain(
                self.whitelist
                    .iter()
                    .map(|mac| ListEntry::new(ListType::Whitelist, mac.clone())),
            )
            .collect()
    }
}

/// Reply to a list mutation.
///
/// The controller answers HTTP 200 with `status: "error"` for an unknown
/// list type, a duplicate add, or a missing MAC on remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListChange {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ListChange {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
