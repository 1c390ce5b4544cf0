//! Open/close interaction rules for the sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host layout owns `sidebar_open`; the sidebar only asks it to change
//! through a setter. These functions decide when a gesture should produce a
//! setter call so the component's event listeners reduce to plumbing.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Expanded flag value at every mount. Never read back from storage.
pub const INITIAL_EXPANDED: bool = true;

/// Where a document click landed relative to the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickHit {
    /// Panel or toggle reference is not attached yet.
    Unbound,
    /// Inside the panel.
    Panel,
    /// Inside the toggle control.
    Toggle,
    /// Anywhere else.
    Outside,
}

impl ClickHit {
    /// Classify a click from containment checks. `None` means the reference
    /// is not attached.
    pub fn classify(in_panel: Option<bool>, in_toggle: Option<bool>) -> Self {
        match (in_panel, in_toggle) {
            (None, _) | (_, None) => Self::Unbound,
            (Some(true), _) => Self::Panel,
            (_, Some(true)) => Self::Toggle,
            (Some(false), Some(false)) => Self::Outside,
        }
    }
}

/// Containment in any toggle control: the sidebar's own close button or an
/// external opener such as the top bar's menu button. An unattached opener
/// counts as not containing the target.
pub fn toggle_hit(toggle: Option<bool>, opener: Option<bool>) -> Option<bool> {
    toggle.map(|in_toggle| in_toggle || opener.unwrap_or(false))
}

pub fn should_close_on_click(open: bool, hit: ClickHit, wide_viewport: bool) -> bool {
    open && hit == ClickHit::Outside && !wide_viewport
}

pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn should_close_on_key(open: bool, key: &str) -> bool {
    open && is_escape(key)
}

/// Document click handler body. Calls `set_open(false)` at most once.
pub fn handle_click<F: FnMut(bool)>(open: bool, hit: ClickHit, wide_viewport: bool, mut set_open: F) {
    if should_close_on_click(open, hit, wide_viewport) {
        set_open(false);
    }
}

/// Document keydown handler body. Calls `set_open(false)` at most once.
pub fn handle_key<F: FnMut(bool)>(open: bool, key: &str, mut set_open: F) {
    if should_close_on_key(open, key) {
        set_open(false);
    }
}

/// Header toggle button: request the opposite of the current state.
pub fn handle_toggle<F: FnMut(bool)>(open: bool, mut set_open: F) {
    set_open(!open);
}

const PANEL_BASE_CLASS: &str = "absolute left-0 top-0 z-9999 flex h-screen w-72.5 flex-col overflow-y-hidden bg-black duration-300 ease-linear dark:bg-boxdark";

/// Panel class: on-screen when open, translated off-screen when closed.
/// Above the `lg` breakpoint the stylesheet keeps it visible.
pub fn panel_class(open: bool) -> String {
    let placement = if open { "translate-x-0 lg:static" } else { "-translate-x-full" };
    format!("{PANEL_BASE_CLASS} {placement}")
}

pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}
