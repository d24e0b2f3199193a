//! Observable holder for the dashboard tooltip
//!
//! One `TooltipStore` is created at startup and handed to every chart and to
//! the tooltip display. Cloning the store clones the handle, not the state.
//!
//! Everything runs on the UI thread: the store is `!Send`, notification is
//! synchronous and has finished by the time the outermost `show`/`hide`
//! returns. A mutation issued from inside an observer is queued behind the
//! notification in progress, so every observer sees the same sequence of
//! states.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use edu_dashboard_shared::{HidePolicy, TooltipConfig, TooltipState};

type Observer = Rc<dyn Fn(&TooltipState)>;

type ObserverId = u64;

struct StoreInner {
    state: TooltipState,
    observers: Vec<(ObserverId, Observer)>,
    next_id: ObserverId,
    hide_policy: HidePolicy,

    // Pending notification rounds, drained by whichever call started first
    pending: VecDeque<(TooltipState, Vec<(ObserverId, Observer)>)>,
    notifying: bool,
}

impl StoreInner {
    fn is_subscribed(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|(observer_id, _)| *observer_id == id)
    }
}

#[derive(Clone)]
pub struct TooltipStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Default for TooltipStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipStore {
    /// Create a hidden store with empty content at (0, 0)
    pub fn new() -> Self {
        Self::with_hide_policy(HidePolicy::Retain)
    }

    pub fn with_config(config: &TooltipConfig) -> Self {
        Self::with_hide_policy(config.hide_policy)
    }

    pub fn with_hide_policy(hide_policy: HidePolicy) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state: TooltipState::default(),
                observers: Vec::new(),
                next_id: 0,
                hide_policy,
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    pub fn hide_policy(&self) -> HidePolicy {
        self.inner.borrow().hide_policy
    }

    /// Replace the whole state with `{visible: true, content, x, y}`
    pub fn show(&self, content: impl Into<String>, x: f64, y: f64) {
        let state = TooltipState::shown(content, x, y);
        log::debug!("Tooltip shown at ({}, {}): {:?}", x, y, state.content);
        self.set(state);
    }

    /// Mark the tooltip hidden
    ///
    /// Under `HidePolicy::Retain` content and coordinates stay at the values
    /// of the last `show`. Observers are notified even if already hidden.
    pub fn hide(&self) {
        let state = {
            let inner = self.inner.borrow();
            match inner.hide_policy {
                HidePolicy::Retain => TooltipState {
                    visible: false,
                    ..inner.state.clone()
                },
                HidePolicy::Clear => TooltipState::default(),
            }
        };
        log::debug!("Tooltip hidden");
        self.set(state);
    }

    /// Register an observer
    ///
    /// The observer runs immediately with the current state, then after every
    /// `show`/`hide` until the returned subscription is cancelled.
    pub fn subscribe(&self, observer: impl Fn(&TooltipState) + 'static) -> Subscription {
        let observer: Observer = Rc::new(observer);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Rc::clone(&observer)));
            (id, inner.state.clone())
        };
        log::trace!("Tooltip observer {} subscribed", id);

        observer(&current);

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TooltipState {
        self.inner.borrow().state.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    fn set(&self, state: TooltipState) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.state = state.clone();
            let observers = inner.observers.clone();
            inner.pending.push_back((state, observers));
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }
        self.drain();
    }

    fn drain(&self) {
        let _guard = DrainGuard { inner: &self.inner };
        loop {
            let round = self.inner.borrow_mut().pending.pop_front();
            let Some((state, observers)) = round else {
                break;
            };

            for (id, observer) in observers {
                // Skip observers cancelled earlier in this round
                if self.inner.borrow().is_subscribed(id) {
                    observer(&state);
                }
            }
        }
    }
}

/// Ends a notification pass, including when an observer panics mid-round
struct DrainGuard<'a> {
    inner: &'a RefCell<StoreInner>,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            if !inner.pending.is_empty() {
                log::warn!(
                    "Dropping {} queued tooltip notifications after an observer panic",
                    inner.pending.len()
                );
                inner.pending.clear();
            }
            inner.notifying = false;
        }
    }
}

/// Handle returned by [`TooltipStore::subscribe`]
///
/// Dropping the handle leaves the observer registered.
pub struct Subscription {
    store: Weak<RefCell<StoreInner>>,
    id: ObserverId,
}

impl Subscription {
    /// Deregister the observer. Safe to call any number of times
    pub fn unsubscribe(&self) {
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.observers.len();
        inner.observers.retain(|(id, _)| *id != self.id);
        if inner.observers.len() != before {
            log::trace!("Tooltip observer {} unsubscribed", self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        match self.store.upgrade() {
            Some(inner) => {
                let active = inner.borrow().is_subscribed(self.id);
                active
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{self, AssertUnwindSafe};

    fn recorder(store: &TooltipStore) -> (Rc<RefCell<Vec<TooltipState>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
        (seen, subscription)
    }

    #[test]
    fn test_subscribe_receives_initial_state() {
        let store = TooltipStore::new();
        let (seen, _sub) = recorder(&store);

        assert_eq!(*seen.borrow(), vec![TooltipState::default()]);
    }

    #[test]
    fn test_show_replaces_state_and_notifies() {
        let store = TooltipStore::new();
        let (seen, _sub) = recorder(&store);

        store.show("Región: Metropolitana, Total: 5842", 120.0, 340.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[1],
            TooltipState::shown("Región: Metropolitana, Total: 5842", 120.0, 340.0)
        );
    }

    #[test]
    fn test_hide_retains_content_by_default() {
        let store = TooltipStore::new();
        store.show("Biobío", 10.0, 20.0);
        store.hide();

        let state = store.state();
        assert!(!state.visible);
        assert_eq!(state.content, "Biobío");
        assert_eq!((state.x, state.y), (10.0, 20.0));
    }

    #[test]
    fn test_hide_clear_policy_resets_state() {
        let store = TooltipStore::with_hide_policy(HidePolicy::Clear);
        store.show("Biobío", 10.0, 20.0);
        store.hide();

        assert_eq!(store.state(), TooltipState::default());
    }

    #[test]
    fn test_hide_when_hidden_still_notifies() {
        let store = TooltipStore::new();
        let (seen, _sub) = recorder(&store);

        store.hide();
        store.hide();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|state| *state == TooltipState::default()));
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let store = TooltipStore::new();
        let (seen, sub) = recorder(&store);
        assert!(sub.is_active());

        sub.unsubscribe();
        sub.unsubscribe();
        store.show("after", 1.0, 1.0);

        assert!(!sub.is_active());
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = TooltipStore::new();
        let sub = store.subscribe(|_| {});
        drop(store);

        sub.unsubscribe();
        assert!(!sub.is_active());
    }

    #[test]
    fn test_clones_share_state() {
        let store = TooltipStore::new();
        let handle = store.clone();
        let (seen, _sub) = recorder(&store);

        handle.show("shared", 5.0, 6.0);

        assert_eq!(store.state(), TooltipState::shown("shared", 5.0, 6.0));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_unsubscribe_from_inside_observer() {
        let store = TooltipStore::new();
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let counter = Rc::clone(&calls);
        let own = Rc::clone(&slot);
        let sub = store.subscribe(move |state| {
            counter.set(counter.get() + 1);
            if state.visible {
                if let Some(sub) = own.borrow().as_ref() {
                    sub.unsubscribe();
                }
            }
        });
        *slot.borrow_mut() = Some(sub);

        store.show("once", 0.0, 0.0);
        store.show("twice", 0.0, 0.0);

        assert_eq!(calls.get(), 2);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_nested_mutation_is_delivered_in_order() {
        let store = TooltipStore::new();

        let inner_store = store.clone();
        let _hider = store.subscribe(move |state| {
            if state.visible && state.content == "flash" {
                inner_store.hide();
            }
        });
        let (seen, _sub) = recorder(&store);

        store.show("flash", 3.0, 4.0);

        let seen = seen.borrow();
        let visibility: Vec<bool> = seen.iter().map(|s| s.visible).collect();
        assert_eq!(visibility, vec![false, true, false]);
        assert_eq!(seen[2].content, "flash");
        assert!(!store.state().visible);
    }

    #[test]
    fn test_store_keeps_notifying_after_observer_panic() {
        let store = TooltipStore::new();
        let (seen, _sub) = recorder(&store);
        let failing = store.subscribe(|state| {
            if state.content == "boom" {
                panic!("observer failed");
            }
        });

        let result = panic::catch_unwind(AssertUnwindSafe(|| store.show("boom", 0.0, 0.0)));
        assert!(result.is_err());

        failing.unsubscribe();
        store.show("after", 1.0, 1.0);

        let contents: Vec<String> = seen.borrow().iter().map(|s| s.content.clone()).collect();
        assert_eq!(contents, vec!["", "boom", "after"]);
        assert_eq!(store.state(), TooltipState::shown("after", 1.0, 1.0));
    }

    #[test]
    fn test_hide_policy_accessor() {
        assert_eq!(TooltipStore::new().hide_policy(), HidePolicy::Retain);
        let config = TooltipConfig {
            hide_policy: HidePolicy::Clear,
            ..TooltipConfig::default()
        };
        assert_eq!(TooltipStore::with_config(&config).hide_policy(), HidePolicy::Clear);
    }
}
