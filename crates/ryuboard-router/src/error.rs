use thiserror::Error;

/// Route table and navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    // ── Lookup ──────────────────────────────────────────────────────
    /// No route matches the path. The router mounts `ViewId::NotFound`.
    #[error("no route for path '{path}'")]
    NotFound { path: String },

    /// `navigate` / `href` was given a name no route carries.
    #[error("no route named '{name}'")]
    UnknownName { name: String },

    // ── Table validation ────────────────────────────────────────────
    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },

    #[error("duplicate route name '{name}'")]
    DuplicateName { name: String },

    #[error("route table has no root '/' route")]
    MissingRoot,

    #[error("route path '{path}' must start with '/'")]
    InvalidPath { path: String },

    #[error("route '{path}' targets the reserved NotFound view")]
    ReservedView { path: String },
}
