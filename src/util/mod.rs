//! Browser-facing helpers for the sidebar.
//!
//! `browser` wraps the raw web-sys calls, while `expanded_pref` and
//! `listeners` put those calls behind small traits so the side effects of the
//! expanded flag and the listener lifetime can be exercised off-browser.

pub mod browser;
pub mod expanded_pref;
pub mod listeners;
