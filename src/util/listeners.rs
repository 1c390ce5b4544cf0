//! Lifetime of the sidebar's document listeners.
//!
//! A mounted sidebar holds exactly one click/keydown pair. The pair is
//! installed together, removed together, and tied to the reactive owner that
//! installed it, so unmounting the component is what tears it down.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use leptos::prelude::on_cleanup;
use send_wrapper::SendWrapper;

use crate::util::browser::BrowserError;

pub const CLICK: &str = "click";
pub const KEYDOWN: &str = "keydown";

/// Where listeners are registered. The browser implementation is
/// `browser::DocumentHost`.
pub trait ListenerHost {
    type Handler;
    type Handle;

    fn install(&mut self, event: &'static str, handler: Self::Handler) -> Result<Self::Handle, BrowserError>;
    fn remove(&mut self, handle: Self::Handle);
}

/// The outside-click and Escape listeners of one mounted sidebar.
pub struct DismissListeners<H: ListenerHost> {
    click: H::Handle,
    keydown: H::Handle,
}

impl<H: ListenerHost> DismissListeners<H> {
    /// Install both listeners. If the second install fails the first is
    /// removed before the error is returned.
    pub fn install(host: &mut H, on_click: H::Handler, on_keydown: H::Handler) -> Result<Self, BrowserError> {
        let click = host.install(CLICK, on_click)?;
        match host.install(KEYDOWN, on_keydown) {
            Ok(keydown) => Ok(Self { click, keydown }),
            Err(err) => {
                host.remove(click);
                Err(err)
            }
        }
    }

    pub fn remove(self, host: &mut H) {
        host.remove(self.click);
        host.remove(self.keydown);
    }
}

/// Install the pair under the current reactive owner and remove it when that
/// owner is cleaned up.
pub fn scope_dismiss_listeners<H>(mut host: H, on_click: H::Handler, on_keydown: H::Handler) -> Result<(), BrowserError>
where
    H: ListenerHost + 'static,
    H::Handle: 'static,
{
    let listeners = DismissListeners::install(&mut host, on_click, on_keydown)?;
    let scoped = SendWrapper::new((host, listeners));
    on_cleanup(move || {
        let (mut host, listeners) = scoped.take();
        listeners.remove(&mut host);
    });
    Ok(())
}
