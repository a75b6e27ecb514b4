//! CLI error types with miette diagnostics.
//!
//! Maps API, config, and route errors into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use ryuboard_api::Error as ApiError;
use ryuboard_config::ConfigError;
use ryuboard_router::RouteError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const HTTP_STATUS: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(ryuboard::connection_failed),
        help(
            "Check that ryu-manager is running with the DDoS web app loaded.\n\
             URL: {url}\n\
             Set the backend with --base-url or API_BASE_URL."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(ryuboard::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { url: String },

    // ── Backend ──────────────────────────────────────────────────────
    #[error("Controller returned HTTP {status}")]
    #[diagnostic(
        code(ryuboard::http_status),
        help("Response body: {body}")
    )]
    HttpStatus { status: u16, body: String },

    #[error("Controller sent an unreadable response: {message}")]
    #[diagnostic(
        code(ryuboard::invalid_response),
        help("Is the base URL pointing at the REST API root (usually ending in /api)?")
    )]
    InvalidResponse { message: String, body: String },

    #[error("Controller rejected the change: {message}")]
    #[diagnostic(
        code(ryuboard::list_rejected),
        help("Run: ryuboard lists show")
    )]
    ListRejected { message: String },

    #[error(transparent)]
    #[diagnostic(code(ryuboard::api))]
    Api(ApiError),

    // ── Routes ───────────────────────────────────────────────────────
    #[error("No dashboard route for '{path}'")]
    #[diagnostic(
        code(ryuboard::no_route),
        help("Known paths: {known}\nUnknown paths mount the NotFound view.")
    )]
    NoRoute { path: String, known: String },

    #[error("No dashboard route named '{name}'")]
    #[diagnostic(code(ryuboard::unknown_route), help("Known names: {known}"))]
    UnknownRouteName { name: String, known: String },

    #[error(transparent)]
    #[diagnostic(code(ryuboard::route))]
    Route(RouteError),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ryuboard::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(ryuboard::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(ryuboard::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(ryuboard::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(ryuboard::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(ryuboard::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::HttpStatus { .. } => exit_code::HTTP_STATUS,
            Self::ListRejected { .. } | Self::ConfigExists { .. } => exit_code::CONFLICT,
            Self::NoRoute { .. } | Self::UnknownRouteName { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error → CliError mapping ─────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, body } => Self::HttpStatus { status, body },
            ApiError::Deserialization { message, body } => Self::InvalidResponse { message, body },
            ApiError::Transport(e) => {
                let url = e
                    .url()
                    .map_or_else(|| "(unknown)".into(), ToString::to_string);
                if e.is_timeout() {
                    Self::Timeout { url }
                } else if e.is_connect() {
                    Self::ConnectionFailed { url, source: e }
                } else {
                    Self::Api(ApiError::Transport(e))
                }
            }
            other => Self::Api(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

impl From<RouteError> for CliError {
    fn from(err: RouteError) -> Self {
        let table = ryuboard_router::RouteTable::default();
        match err {
            RouteError::NotFound { path } => Self::NoRoute {
                path,
                known: table
                    .routes()
                    .iter()
                    .map(|r| r.path)
                    .collect::<Vec<_>>()
                    .join(", "),
            },
            RouteError::UnknownName { name } => Self::UnknownRouteName {
                name,
                known: table
                    .routes()
                    .iter()
                    .map(|r| r.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            },
            other => Self::Route(other),
        }
    }
}
