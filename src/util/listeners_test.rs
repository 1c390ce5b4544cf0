use std::cell::RefCell;
use std::rc::Rc;

use leptos::reactive::owner::Owner;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Install(&'static str),
    Remove(&'static str),
}

#[derive(Clone, Default)]
struct RecordingHost {
    calls: Rc<RefCell<Vec<Call>>>,
    fail_on: Option<&'static str>,
}

impl RecordingHost {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn live(&self) -> usize {
        self.calls.borrow().iter().fold(0, |live, call| match call {
            Call::Install(_) => live + 1,
            Call::Remove(_) => live - 1,
        })
    }
}

impl ListenerHost for RecordingHost {
    type Handler = ();
    type Handle = &'static str;

    fn install(&mut self, event: &'static str, _handler: ()) -> Result<&'static str, BrowserError> {
        if self.fail_on == Some(event) {
            return Err(BrowserError::Listener { event });
        }
        self.calls.borrow_mut().push(Call::Install(event));
        Ok(event)
    }

    fn remove(&mut self, handle: &'static str) {
        self.calls.borrow_mut().push(Call::Remove(handle));
    }
}

// =============================================================
// DismissListeners
// =============================================================

#[test]
fn install_registers_one_click_and_one_keydown() {
    let mut host = RecordingHost::default();
    let _listeners = DismissListeners::install(&mut host, (), ()).unwrap();
    assert_eq!(host.calls(), vec![Call::Install("click"), Call::Install("keydown")]);
}

#[test]
fn remove_drops_both_listeners() {
    let mut host = RecordingHost::default();
    let listeners = DismissListeners::install(&mut host, (), ()).unwrap();
    listeners.remove(&mut host);
    assert_eq!(host.live(), 0);
    assert_eq!(&host.calls()[2..], &[Call::Remove("click"), Call::Remove("keydown")]);
}

#[test]
fn failed_keydown_install_removes_click_again() {
    let mut host = RecordingHost { fail_on: Some("keydown"), ..RecordingHost::default() };
    let result = DismissListeners::install(&mut host, (), ());
    assert!(matches!(result, Err(BrowserError::Listener { event: "keydown" })));
    assert_eq!(host.calls(), vec![Call::Install("click"), Call::Remove("click")]);
    assert_eq!(host.live(), 0);
}

#[test]
fn failed_click_install_registers_nothing() {
    let mut host = RecordingHost { fail_on: Some("click"), ..RecordingHost::default() };
    assert!(DismissListeners::install(&mut host, (), ()).is_err());
    assert!(host.calls().is_empty());
}

// =============================================================
// Owner-scoped lifetime
// =============================================================

#[test]
fn scoped_pair_lives_until_owner_cleanup() {
    let host = RecordingHost::default();
    let owner = Owner::new();

    owner.with(|| scope_dismiss_listeners(host.clone(), (), ())).unwrap();
    assert_eq!(host.calls(), vec![Call::Install("click"), Call::Install("keydown")]);
    assert_eq!(host.live(), 2);

    owner.cleanup();
    assert_eq!(host.live(), 0);
    assert_eq!(&host.calls()[2..], &[Call::Remove("click"), Call::Remove("keydown")]);
}

#[test]
fn remounting_never_accumulates_listeners() {
    let host = RecordingHost::default();

    for _ in 0..3 {
        let owner = Owner::new();
        owner.with(|| scope_dismiss_listeners(host.clone(), (), ())).unwrap();
        assert_eq!(host.live(), 2);
        owner.cleanup();
        assert_eq!(host.live(), 0);
    }
    assert_eq!(host.calls().len(), 12);
}

#[test]
fn scoped_install_failure_leaves_nothing_registered() {
    let host = RecordingHost { fail_on: Some("keydown"), ..RecordingHost::default() };
    let owner = Owner::new();
    let result = owner.with(|| scope_dismiss_listeners(host.clone(), (), ()));
    assert!(result.is_err());
    owner.cleanup();
    assert_eq!(host.calls(), vec![Call::Install("click"), Call::Remove("click")]);
}
