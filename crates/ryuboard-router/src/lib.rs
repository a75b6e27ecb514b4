//! Route table and history-based router for the dashboard views.
//!
//! - **[`RouteTable`]**: validated, declarative `path → view` mapping built
//!   from [`ROUTES`]. `/` mounts the dashboard, `/lists` the list editor.
//! - **[`Router`]**: tracks the browser location with a history stack,
//!   exposes [`resolve`](Router::resolve) / [`navigate`](Router::navigate),
//!   and publishes the mounted [`ViewId`] on a `watch` channel.
//!
//! Paths the table does not know mount [`ViewId::NotFound`] rather than
//! failing silently.

pub mod error;
pub mod route;
pub mod router;

pub use error::RouteError;
pub use route::{ROUTES, Route, RouteTable, ViewId};
pub use router::{Navigation, Router};
