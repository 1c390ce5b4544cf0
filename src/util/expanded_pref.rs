//! Expanded-flag persistence and `<body>` class sync.
//!
//! The flag is write-only: every change is stored and mirrored as a body
//! class for the stylesheet, but nothing reads it back at mount.

#[cfg(test)]
#[path = "expanded_pref_test.rs"]
mod expanded_pref_test;

use crate::config::SidebarConfig;
use crate::util::browser::{self, BrowserError};

/// Destination for the expanded flag's side effects.
pub trait PreferenceSink {
    fn persist(&mut self, key: &str, value: &str) -> Result<(), BrowserError>;
    fn set_body_class(&mut self, class: &str, enabled: bool) -> Result<(), BrowserError>;
}

/// Writes to the real `localStorage` and `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSink;

impl PreferenceSink for BrowserSink {
    fn persist(&mut self, key: &str, value: &str) -> Result<(), BrowserError> {
        browser::store_item(key, value)
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) -> Result<(), BrowserError> {
        browser::set_body_class(class, enabled)
    }
}

pub fn storage_value(expanded: bool) -> &'static str {
    if expanded { "true" } else { "false" }
}

/// Apply both side effects for `expanded`. The body class is updated even if
/// the storage write fails; the first error is returned.
pub fn sync_expanded<S: PreferenceSink>(
    sink: &mut S,
    config: &SidebarConfig,
    expanded: bool,
) -> Result<(), BrowserError> {
    let persisted = sink.persist(config.storage_key, storage_value(expanded));
    let classed = sink.set_body_class(config.body_class, expanded);
    persisted.and(classed)
}
