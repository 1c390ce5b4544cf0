//! Static navigation table and active-route matching.
//!
//! The home entry matches only the exact root path; every other entry matches
//! when the current path contains its segment anywhere. The asymmetry is
//! observable (`/mata-kuliah/123` highlights Subjects, `/foo` highlights
//! nothing) and must not be normalized.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Identity of a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    Dashboard,
    Subjects,
    Information,
    Users,
}

/// Icon shown beside an entry's label. Rendered as a Font Awesome class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    GraduationCap,
    InfoCircle,
    Users,
    Close,
}

impl NavIcon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Dashboard => "fa-solid fa-gauge",
            Self::GraduationCap => "fa-solid fa-graduation-cap",
            Self::InfoCircle => "fa-solid fa-circle-info",
            Self::Users => "fa-solid fa-users",
            Self::Close => "fa-solid fa-xmark fa-xl",
        }
    }
}

/// How an entry decides it is the active route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRule {
    /// Current path must equal the entry path.
    Exact,
    /// Current path must contain the given segment as a substring.
    Contains(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub key: NavKey,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub rule: RouteRule,
}

impl NavEntry {
    pub fn is_active(&self, pathname: &str) -> bool {
        match self.rule {
            RouteRule::Exact => pathname == self.path,
            RouteRule::Contains(segment) => pathname.contains(segment),
        }
    }
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        key: NavKey::Dashboard,
        label: "Dasbor",
        path: "/",
        icon: NavIcon::Dashboard,
        rule: RouteRule::Exact,
    },
    NavEntry {
        key: NavKey::Subjects,
        label: "Mata Kuliah",
        path: "/mata-kuliah",
        icon: NavIcon::GraduationCap,
        rule: RouteRule::Contains("mata-kuliah"),
    },
    NavEntry {
        key: NavKey::Information,
        label: "Informasi",
        path: "/informasi",
        icon: NavIcon::InfoCircle,
        rule: RouteRule::Contains("informasi"),
    },
    NavEntry {
        key: NavKey::Users,
        label: "Pengguna",
        path: "/pengguna",
        icon: NavIcon::Users,
        rule: RouteRule::Contains("pengguna"),
    },
];

/// Keys of every entry highlighted for `pathname`, in table order.
pub fn active_keys(pathname: &str) -> Vec<NavKey> {
    NAV_ENTRIES
        .iter()
        .filter(|entry| entry.is_active(pathname))
        .map(|entry| entry.key)
        .collect()
}

pub fn entry(key: NavKey) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.key == key)
}

const LINK_BASE_CLASS: &str = "group relative flex items-center gap-2.5 rounded-sm py-2 px-4 font-medium text-bodydark1 duration-300 ease-in-out hover:bg-graydark dark:hover:bg-meta-4";
const LINK_ACTIVE_CLASS: &str = "bg-graydark dark:bg-meta-4";

/// Class string for a nav link; active links get the highlight background.
pub fn link_class(active: bool) -> String {
    if active {
        format!("{LINK_BASE_CLASS} {LINK_ACTIVE_CLASS}")
    } else {
        LINK_BASE_CLASS.to_owned()
    }
}
