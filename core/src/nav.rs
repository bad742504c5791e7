//! Navigation shell — route table and sidebar.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Departments,
    Workflows,
    Calculator,
    Automation,
    Roadmap,
    /// Any unmatched path, kept verbatim for the not-found page.
    NotFound(String),
}

impl Route {
    /// Exact path match. A query string, fragment, or single trailing
    /// slash is ignored; everything else unmatched is `NotFound`.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        match normalized {
            "/"            => Route::Dashboard,
            "/departments" => Route::Departments,
            "/workflows"   => Route::Workflows,
            "/calculator"  => Route::Calculator,
            "/automation"  => Route::Automation,
            "/roadmap"     => Route::Roadmap,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard   => "/",
            Route::Departments => "/departments",
            Route::Workflows   => "/workflows",
            Route::Calculator  => "/calculator",
            Route::Automation  => "/automation",
            Route::Roadmap     => "/roadmap",
            Route::NotFound(path) => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

pub struct NavEntry {
    pub name: &'static str,
    pub route: Route,
}

/// Sidebar order.
pub static NAVIGATION: [NavEntry; 6] = [
    NavEntry { name: "Dashboard",      route: Route::Dashboard },
    NavEntry { name: "Departments",    route: Route::Departments },
    NavEntry { name: "Workflows",      route: Route::Workflows },
    NavEntry { name: "ROI Calculator", route: Route::Calculator },
    NavEntry { name: "Automation",     route: Route::Automation },
    NavEntry { name: "Roadmap",        route: Route::Roadmap },
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SidebarItem {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Sidebar entries with the current route marked. A not-found route marks none.
pub fn sidebar(active: &Route) -> Vec<SidebarItem> {
    NAVIGATION
        .iter()
        .map(|entry| SidebarItem {
            name: entry.name,
            href: entry.route.path(),
            active: entry.route == *active,
        })
        .collect()
}
