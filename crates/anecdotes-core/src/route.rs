//! Client-side route table.

use std::fmt;

use crate::anecdote::AnecdoteId;

/// Path of the list view.
pub const LIST_PATH: &str = "/";
/// Path of the creation form.
pub const CREATE_PATH: &str = "/create";
/// Path of the about page.
pub const ABOUT_PATH: &str = "/about";
/// Prefix shared by all detail pages.
pub const DETAIL_PREFIX: &str = "/anecdotes";

/// Older spelling of the create path, kept reachable through a redirect.
pub const LEGACY_CREATE_SEGMENT: &str = "create new";
/// Percent-encoded form of [`LEGACY_CREATE_SEGMENT`], as the browser reports it.
pub const LEGACY_CREATE_SEGMENT_ENCODED: &str = "create%20new";

/// A page the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// All anecdotes.
    List,
    /// A single anecdote.
    Detail(AnecdoteId),
    /// The creation form.
    Create,
    /// Static information page.
    About,
}

impl AppRoute {
    /// Resolve a location pathname to a route.
    ///
    /// Trailing slashes are ignored. A detail path whose id is not a number
    /// does not resolve.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Some(Self::List),
            ["create"] | [LEGACY_CREATE_SEGMENT] | [LEGACY_CREATE_SEGMENT_ENCODED] => {
                Some(Self::Create)
            }
            ["about"] => Some(Self::About),
            ["anecdotes", id] => id.parse().ok().map(Self::Detail),
            _ => None,
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::List => LIST_PATH.to_string(),
            Self::Detail(id) => format!("{DETAIL_PREFIX}/{id}"),
            Self::Create => CREATE_PATH.to_string(),
            Self::About => ABOUT_PATH.to_string(),
        }
    }

    /// The anecdote a detail route points at.
    pub fn anecdote_id(&self) -> Option<AnecdoteId> {
        match self {
            Self::Detail(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Label and target of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub route: AppRoute,
}

/// Entries of the navigation menu, in display order.
pub const MENU: [MenuEntry; 3] = [
    MenuEntry {
        label: "anecdotes",
        route: AppRoute::List,
    },
    MenuEntry {
        label: "create new",
        route: AppRoute::Create,
    },
    MenuEntry {
        label: "about",
        route: AppRoute::About,
    },
];
