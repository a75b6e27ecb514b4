//! Route table: the declarative path → view mapping.

use std::fmt;

use serde::Serialize;

use crate::error::RouteError;

/// Identifies each dashboard view a route can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum ViewId {
    /// Alerts, traffic chart, and topology (landing page).
    Dashboard,
    /// Whitelist / blacklist management.
    Lists,
    /// Mounted for any path the table does not know. Never a table entry.
    NotFound,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewId,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) -> {}", self.path, self.name, self.view)
    }
}

/// The dashboard's routes, in match order.
pub const ROUTES: [Route; 2] = [
    Route {
        path: "/",
        name: "Dashboard",
        view: ViewId::Dashboard,
    },
    Route {
        path: "/lists",
        name: "Lists",
        view: ViewId::Lists,
    },
];

/// Validated, immutable route table.
///
/// Paths and names are unique and exactly one route sits at `/`.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: ROUTES.to_vec(),
        }
    }
}

impl RouteTable {
    /// Build a table, rejecting duplicate paths or names, a missing root,
    /// and routes that target the reserved `NotFound` view.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, RouteError> {
        let routes: Vec<Route> = routes.into_iter().collect();

        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath {
                    path: route.path.into(),
                });
            }
            if route.view == ViewId::NotFound {
                return Err(RouteError::ReservedView {
                    path: route.path.into(),
                });
            }
            let earlier = &routes[..i];
            if earlier.iter().any(|r| same_path(r.path, route.path)) {
                return Err(RouteError::DuplicatePath {
                    path: route.path.into(),
                });
            }
            if earlier.iter().any(|r| r.name == route.name) {
                return Err(RouteError::DuplicateName {
                    name: route.name.into(),
                });
            }
        }

        if !routes.iter().any(|r| r.path == "/") {
            return Err(RouteError::MissingRoot);
        }

        Ok(Self { routes })
    }

    /// All routes, in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Look up the route for a browser path.
    ///
    /// Query string and fragment are ignored, one trailing slash is
    /// optional, and matching is ASCII case-insensitive.
    pub fn resolve(&self, path: &str) -> Result<&Route, RouteError> {
        self.routes
            .iter()
            .find(|r| same_path(r.path, path))
            .ok_or_else(|| RouteError::NotFound { path: path.into() })
    }

    /// Look up a route by its name.
    pub fn by_name(&self, name: &str) -> Result<&Route, RouteError> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RouteError::UnknownName { name: name.into() })
    }

    /// Reverse lookup: the path a named route lives at.
    pub fn href(&self, name: &str) -> Result<&'static str, RouteError> {
        self.by_name(name).map(|r| r.path)
    }

    /// The landing route at `/`.
    pub fn root(&self) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == "/")
    }
}

/// Strip query and fragment, then one trailing slash (except at the root).
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path {
        "" | "/" => "/",
        p => p.strip_suffix('/').unwrap_or(p),
    }
}

fn same_path(a: &str, b: &str) -> bool {
    normalize(a).eq_ignore_ascii_case(normalize(b))
}
