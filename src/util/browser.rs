//! Browser glue for viewport, `localStorage`, and `<body>` classes.
//!
//! Every helper returns a typed error instead of panicking when the browser
//! object it needs is missing. Without the `hydrate` feature the helpers are
//! no-ops so server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::config::SidebarConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BrowserError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("localStorage is not available")]
    StorageUnavailable,
    #[error("localStorage write failed for key {key}")]
    StorageWrite { key: String },
    #[error("media query failed: {query}")]
    MediaQuery { query: String },
    #[error("class list update failed for {class}")]
    ClassList { class: String },
    #[error("could not register document {event} listener")]
    Listener { event: &'static str },
}

#[cfg(feature = "hydrate")]
fn document() -> Result<web_sys::Document, BrowserError> {
    web_sys::window()
        .ok_or(BrowserError::NoWindow)?
        .document()
        .ok_or(BrowserError::NoDocument)
}

/// Whether the viewport is at or above the always-visible breakpoint.
pub fn viewport_is_wide(config: &SidebarConfig) -> Result<bool, BrowserError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let query = config.wide_media_query();
        let list = window
            .match_media(&query)
            .ok()
            .flatten()
            .ok_or(BrowserError::MediaQuery { query })?;
        Ok(list.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Ok(false)
    }
}

/// Write `value` under `key` in `localStorage`.
pub fn store_item(key: &str, value: &str) -> Result<(), BrowserError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(BrowserError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| BrowserError::StorageWrite { key: key.to_owned() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Ok(())
    }
}

/// Add or remove `class` on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) -> Result<(), BrowserError> {
    #[cfg(feature = "hydrate")]
    {
        let body = document()?.body().ok_or(BrowserError::NoBody)?;
        let list = body.class_list();
        let result = if enabled { list.add_1(class) } else { list.remove_1(class) };
        result.map_err(|_| BrowserError::ClassList { class: class.to_owned() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, enabled);
        Ok(())
    }
}

/// Containment check for a click target.
///
/// Returns `None` when the container reference is not attached yet. A missing
/// target counts as outside.
#[cfg(feature = "hydrate")]
pub fn node_contains(container: Option<&web_sys::Node>, target: Option<&web_sys::Node>) -> Option<bool> {
    let container = container?;
    Some(target.is_some_and(|node| container.contains(Some(node))))
}

/// A capture-phase listener on `document`, removed by [`DocumentListener::remove`].
///
/// Capture phase runs before any bubbling handler in the tree, including
/// Leptos' delegated handlers, so the callback observes state as it was
/// before the click was handled.
#[cfg(feature = "hydrate")]
pub struct DocumentListener {
    event: &'static str,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl DocumentListener {
    pub fn install(event: &'static str, handler: Box<dyn FnMut(web_sys::Event)>) -> Result<Self, BrowserError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = document()?;
        let callback = Closure::wrap(handler);
        document
            .add_event_listener_with_callback_and_bool(event, callback.as_ref().unchecked_ref(), true)
            .map_err(|_| BrowserError::Listener { event })?;
        leptos::logging::log!("document {event} listener installed");
        Ok(Self { event, callback })
    }

    pub fn remove(self) {
        use wasm_bindgen::JsCast;

        let Ok(document) = document() else {
            return;
        };
        let _ = document.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            true,
        );
        leptos::logging::log!("document {} listener removed", self.event);
    }
}

/// Registers listeners on the real `document`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentHost;

#[cfg(feature = "hydrate")]
impl crate::util::listeners::ListenerHost for DocumentHost {
    type Handler = Box<dyn FnMut(web_sys::Event)>;
    type Handle = DocumentListener;

    fn install(&mut self, event: &'static str, handler: Self::Handler) -> Result<DocumentListener, BrowserError> {
        DocumentListener::install(event, handler)
    }

    fn remove(&mut self, handle: DocumentListener) {
        handle.remove();
    }
}
