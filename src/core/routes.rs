//! Navigation routes
//!
//! A `RoutePath` is the logical name of an application screen; the
//! server maps each one to a URL and a rendering handler. Navigation
//! requested by a container is expressed as a `RoutePath`, never as a
//! raw URL.

use serde::{Deserialize, Serialize};

/// Named application screens reachable via the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
}

impl RoutePath {
    /// URL path this route is served under
    pub fn path(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "/bills",
            RoutePath::NewBill => "/bills/new",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(RoutePath::Login.path(), "/");
        assert_eq!(RoutePath::Bills.path(), "/bills");
        assert_eq!(RoutePath::NewBill.path(), "/bills/new");
    }
}
