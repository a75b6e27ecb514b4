//! History-based router over a [`RouteTable`].

use tokio::sync::watch;
use tracing::debug;

use crate::error::RouteError;
use crate::route::{Route, RouteTable, ViewId, normalize};

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The location moved; `from` and `to` are the mounted views.
    Changed { from: ViewId, to: ViewId },
    /// The target is already the current location. No history entry added.
    Unchanged,
}

/// Resolves browser paths to views and tracks navigation history.
///
/// History behaves like the browser's: `visit`/`navigate` drop any forward
/// entries before pushing, `back`/`forward` move without pushing.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    history: Vec<String>,
    cursor: usize,
    view_tx: watch::Sender<ViewId>,
}

impl Router {
    /// Create a router positioned at `initial_path` (whatever the browser
    /// currently shows). An empty path starts on the table's root route.
    pub fn new(table: RouteTable, initial_path: &str) -> Self {
        let initial_path = if initial_path.is_empty() {
            table.root().map_or("/", |r| r.path)
        } else {
            initial_path
        };
        let view = view_for(&table, initial_path);
        let (view_tx, _) = watch::channel(view);
        debug!(path = initial_path, %view, "router initialized");
        Self {
            table,
            history: vec![initial_path.to_owned()],
            cursor: 0,
            view_tx,
        }
    }

    /// Look up `path` in the route table.
    pub fn resolve(&self, path: &str) -> Result<&Route, RouteError> {
        self.table.resolve(path)
    }

    /// Push a history entry for the route called `name`.
    pub fn navigate(&mut self, name: &str) -> Result<Navigation, RouteError> {
        let path = self.table.by_name(name)?.path;
        Ok(self.visit(path))
    }

    /// Direct URL entry: push `path` and mount whatever it resolves to.
    pub fn visit(&mut self, path: &str) -> Navigation {
        if normalize(path).eq_ignore_ascii_case(normalize(self.current_path())) {
            return Navigation::Unchanged;
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(path.to_owned());
        self.cursor = self.history.len() - 1;
        self.mount()
    }

    /// Step back one history entry. `None` at the oldest entry.
    pub fn back(&mut self) -> Option<Navigation> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.mount())
    }

    /// Step forward one history entry. `None` at the newest entry.
    pub fn forward(&mut self) -> Option<Navigation> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.mount())
    }

    /// The path of the current history entry.
    pub fn current_path(&self) -> &str {
        self.history
            .get(self.cursor)
            .map_or("/", String::as_str)
    }

    /// The route the current path resolves to, if any.
    pub fn current_route(&self) -> Option<&Route> {
        self.table.resolve(self.current_path()).ok()
    }

    /// The view currently mounted.
    pub fn current_view(&self) -> ViewId {
        *self.view_tx.borrow()
    }

    /// Subscribe to view transitions.
    pub fn subscribe(&self) -> watch::Receiver<ViewId> {
        self.view_tx.subscribe()
    }

    /// Number of history entries (including the initial one).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Publish the view for the entry under the cursor.
    fn mount(&mut self) -> Navigation {
        let to = view_for(&self.table, self.current_path());
        let from = self.view_tx.send_replace(to);
        debug!(path = self.current_path(), %from, %to, "view transition");
        Navigation::Changed { from, to }
    }
}

fn view_for(table: &RouteTable, path: &str) -> ViewId {
    table.resolve(path).map_or(ViewId::NotFound, |r| r.view)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn router_at(path: &str) -> Router {
        Router::new(RouteTable::default(), path)
    }

    #[test]
    fn starts_on_dashboard_at_root() {
        let router = router_at("/");
        assert_eq!(router.current_view(), ViewId::Dashboard);
        assert_eq!(router.current_route().unwrap().name, "Dashboard");
        assert_eq!(router.history_len(), 1);
    }

    #[test]
    fn empty_initial_path_starts_at_root() {
        let router = router_at("");
        assert_eq!(router.current_path(), "/");
        assert_eq!(router.current_view(), ViewId::Dashboard);
        assert_eq!(router.current_route(), RouteTable::default().root());
    }

    #[test]
    fn starts_on_not_found_for_unknown_path() {
        let router = router_at("/nope");
        assert_eq!(router.current_view(), ViewId::NotFound);
        assert!(router.current_route().is_none());
    }

    #[test]
    fn navigate_by_name_pushes_history() {
        let mut router = router_at("/");
        let nav = router.navigate("Lists").unwrap();
        assert_eq!(
            nav,
            Navigation::Changed {
                from: ViewId::Dashboard,
                to: ViewId::Lists
            }
        );
        assert_eq!(router.current_path(), "/lists");
        assert_eq!(router.history_len(), 2);
    }

    #[test]
    fn navigate_to_current_route_is_unchanged() {
        let mut router = router_at("/lists/");
        assert_eq!(router.navigate("Lists").unwrap(), Navigation::Unchanged);
        assert_eq!(router.history_len(), 1);
    }

    #[test]
    fn navigate_unknown_name_fails_without_moving() {
        let mut router = router_at("/");
        let err = router.navigate("Topology").unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownName {
                name: "Topology".into()
            }
        );
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn visit_unknown_path_mounts_not_found() {
        let mut router = router_at("/");
        let nav = router.visit("/settings");
        assert_eq!(
            nav,
            Navigation::Changed {
                from: ViewId::Dashboard,
                to: ViewId::NotFound
            }
        );
        assert!(router.resolve("/settings").is_err());
    }

    #[test]
    fn back_and_forward_walk_history() {
        let mut router = router_at("/");
        router.navigate("Lists").unwrap();

        assert_eq!(
            router.back(),
            Some(Navigation::Changed {
                from: ViewId::Lists,
                to: ViewId::Dashboard
            })
        );
        assert_eq!(router.back(), None);

        assert_eq!(
            router.forward(),
            Some(Navigation::Changed {
                from: ViewId::Dashboard,
                to: ViewId::Lists
            })
        );
        assert_eq!(router.forward(), None);
        assert_eq!(router.history_len(), 2);
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut router = router_at("/");
        router.navigate("Lists").unwrap();
        router.back().unwrap();
        router.visit("/missing");

        assert_eq!(router.history_len(), 2);
        assert_eq!(router.forward(), None);
        assert_eq!(router.current_view(), ViewId::NotFound);
    }

    #[test]
    fn subscribers_see_transitions() {
        let mut router = router_at("/");
        let mut rx = router.subscribe();
        assert_eq!(*rx.borrow_and_update(), ViewId::Dashboard);

        router.navigate("Lists").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ViewId::Lists);

        router.navigate("Lists").unwrap();
        assert!(!rx.has_changed().unwrap());
    }
}
