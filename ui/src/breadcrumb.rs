//! Breadcrumb trail derived from the current path.

/// Display names for the top-level pages.
const ROUTE_NAMES: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/users", "Users"),
    ("/reports", "Reports"),
    ("/settings", "Settings"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub path: String,
}

/// The display name for `path`. Unknown paths read as "Dashboard".
pub fn route_label(path: &str) -> &'static str {
    let path = normalize(path);

    ROUTE_NAMES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, label)| *label)
        .unwrap_or("Dashboard")
}

/// "Home" followed by the current page, unless the current page is home.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let path = normalize(path);
    let mut crumbs = vec![Crumb {
        label: "Home",
        path: "/".to_string(),
    }];

    if path != "/" {
        crumbs.push(Crumb {
            label: route_label(path),
            path: path.to_string(),
        });
    }

    crumbs
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() { "/" } else { trimmed }
}
