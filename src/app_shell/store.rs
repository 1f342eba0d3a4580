//! Single-threaded observable values.
//!
//! A [`Store`] holds one current value and a list of subscribers. Subscribing
//! delivers the current value immediately; later updates are delivered only
//! when the value actually changes (last write wins, nothing is queued).
//!
//! A store may carry a start hook. It runs when the first subscriber arrives
//! and returns a stop hook that runs when the last one leaves, which is how
//! external event sources get attached only while somebody is listening.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;
type StopHook = Box<dyn FnOnce()>;
type StartHook<T> = Box<dyn Fn(Setter<T>) -> StopHook>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
    start: Option<StartHook<T>>,
    stop: RefCell<Option<StopHook>>,
    // Writes made by the start hook only update the value; the new
    // subscriber receives it once the hook returns.
    starting: Cell<bool>,
}

impl<T: Clone + PartialEq + 'static> Inner<T> {
    fn set(&self, value: T) {
        if *self.value.borrow() == value {
            return;
        }
        *self.value.borrow_mut() = value.clone();
        if self.starting.get() {
            return;
        }
        // Callbacks may subscribe or unsubscribe; iterate over a snapshot.
        let subscribers: Vec<Callback<T>> =
            self.subscribers.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for cb in subscribers {
            cb(&value);
        }
    }
}

pub struct Store<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Store {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Write handle given to a start hook. Does not keep the store alive.
pub struct Setter<T> {
    inner: Weak<Inner<T>>,
}

impl<T: Clone + PartialEq + 'static> Setter<T> {
    pub fn set(&self, value: T) {
        if let Some(inner) = self.inner.upgrade() {
            inner.set(value);
        }
    }
}

/// Keeps a subscriber registered; dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Inner<T>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let now_empty = {
            let mut subs = inner.subscribers.borrow_mut();
            subs.retain(|(id, _)| *id != self.id);
            subs.is_empty()
        };
        if now_empty {
            let stop = inner.stop.borrow_mut().take();
            if let Some(stop) = stop {
                stop();
            }
        }
    }
}

impl<T: Clone + PartialEq + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self::build(value, None)
    }

    pub fn readable(value: T, start: impl Fn(Setter<T>) -> StopHook + 'static) -> Self {
        Self::build(value, Some(Box::new(start)))
    }

    fn build(value: T, start: Option<StartHook<T>>) -> Self {
        Store {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                start,
                stop: RefCell::new(None),
                starting: Cell::new(false),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        self.inner.set(value);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription<T> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let first = self.inner.subscribers.borrow().is_empty();
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));

        if first {
            if let Some(start) = &self.inner.start {
                self.inner.starting.set(true);
                let stop = start(Setter {
                    inner: Rc::downgrade(&self.inner),
                });
                self.inner.starting.set(false);
                *self.inner.stop.borrow_mut() = Some(stop);
            }
        }

        let callback = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, cb)| cb.clone());
        if let Some(cb) = callback {
            cb(&self.get());
        }

        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}
