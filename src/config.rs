//! Sidebar configuration: breakpoint, storage key, and body class.
//!
//! The breakpoint is not configurable. Visibility above it comes from the
//! stylesheet's `lg:` variants (`lg:static`, `lg:hidden`), which are fixed at
//! 1024px, so the gesture gate must use the same width.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Width of the stylesheet's `lg` breakpoint, in logical px.
pub const LG_BREAKPOINT_PX: u32 = 1024;
pub const DEFAULT_STORAGE_KEY: &str = "sidebar-expanded";
pub const DEFAULT_BODY_CLASS: &str = "sidebar-expanded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarConfig {
    /// `localStorage` key for the expanded flag.
    pub storage_key: &'static str,
    /// Class toggled on `<body>` to mirror the expanded flag.
    pub body_class: &'static str,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY,
            body_class: DEFAULT_BODY_CLASS,
        }
    }
}

impl SidebarConfig {
    /// Media query matching viewports where the panel is always shown and
    /// dismissal gestures are ignored.
    pub fn wide_media_query(&self) -> String {
        format!("(min-width: {LG_BREAKPOINT_PX}px)")
    }
}
