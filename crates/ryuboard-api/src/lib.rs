// ryuboard-api: Async Rust client for the Ryu DDoS-detection REST backend

pub mod client;
pub mod error;
pub mod lists;
pub mod models;
pub mod monitor;
pub mod topology;
pub mod transport;

pub use client::RyuClient;
pub use error::Error;
pub use models::{
    Alert, AlertReport, ListChange, ListEntry, ListSnapshot, ListType, TrafficSample, from_value,
};
pub use transport::{TlsMode, TransportConfig};
