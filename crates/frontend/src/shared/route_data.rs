//! Поток данных, разрешённых маршрутом.
//!
//! The owner of a route resolves page data and pushes it here; view models
//! subscribe with three callbacks (value / error / completion) and release
//! the subscription on teardown. The stream is hot and multi-subscriber:
//! values are delivered in subscription order, `error` and `complete` are
//! terminal, and a subscriber attaching after termination immediately
//! receives the terminal notification.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

type NextFn<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorFn = Arc<dyn Fn(&str) + Send + Sync>;
type CompleteFn = Arc<dyn Fn() + Send + Sync>;

struct Subscriber<T> {
    id: u64,
    alive: Arc<AtomicBool>,
    on_next: NextFn<T>,
    on_error: ErrorFn,
    on_complete: CompleteFn,
}

enum StreamState {
    Active,
    Errored(String),
    Completed,
}

struct Inner<T> {
    next_id: u64,
    state: StreamState,
    subscribers: Vec<Subscriber<T>>,
}

/// Клонируемая ручка горячего потока данных маршрута.
pub struct RouteDataStream<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for RouteDataStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for RouteDataStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> RouteDataStream<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 1,
                state: StreamState::Active,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register the three callbacks of a subscriber.
    ///
    /// On an already-terminated stream the matching terminal callback fires
    /// immediately and the returned handle is inert.
    pub fn subscribe(
        &self,
        on_next: impl Fn(&T) + Send + Sync + 'static,
        on_error: impl Fn(&str) + Send + Sync + 'static,
        on_complete: impl Fn() + Send + Sync + 'static,
    ) -> Subscription {
        let mut inner = self.inner.lock().expect("route data stream poisoned");
        match &inner.state {
            StreamState::Active => {}
            StreamState::Errored(message) => {
                let message = message.clone();
                drop(inner);
                on_error(&message);
                return Subscription::settled();
            }
            StreamState::Completed => {
                drop(inner);
                on_complete();
                return Subscription::settled();
            }
        }

        let id = inner.next_id;
        inner.next_id += 1;
        let alive = Arc::new(AtomicBool::new(true));
        inner.subscribers.push(Subscriber {
            id,
            alive: Arc::clone(&alive),
            on_next: Arc::new(on_next),
            on_error: Arc::new(on_error),
            on_complete: Arc::new(on_complete),
        });
        drop(inner);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription::active(alive, move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .expect("route data stream poisoned")
                    .subscribers
                    .retain(|s| s.id != id);
            }
        })
    }

    /// Deliver a value to every live subscriber, in subscription order.
    /// Ignored once the stream has terminated.
    pub fn emit(&self, value: T) {
        let snapshot: Vec<(Arc<AtomicBool>, NextFn<T>)> = {
            let inner = self.inner.lock().expect("route data stream poisoned");
            if !matches!(inner.state, StreamState::Active) {
                return;
            }
            inner
                .subscribers
                .iter()
                .map(|s| (Arc::clone(&s.alive), Arc::clone(&s.on_next)))
                .collect()
        };

        for (alive, on_next) in snapshot {
            // A callback earlier in the same emission may have released this
            // subscription; it must not be invoked anymore.
            if alive.load(Ordering::SeqCst) {
                on_next(&value);
            }
        }
    }

    /// Terminal failure. Subscribers receive `on_error`; `on_complete` is
    /// NOT invoked. Later emissions are ignored.
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        let drained: Vec<Subscriber<T>> = {
            let mut inner = self.inner.lock().expect("route data stream poisoned");
            if !matches!(inner.state, StreamState::Active) {
                return;
            }
            inner.state = StreamState::Errored(message.clone());
            std::mem::take(&mut inner.subscribers)
        };

        for subscriber in drained {
            if subscriber.alive.load(Ordering::SeqCst) {
                (subscriber.on_error)(&message);
            }
        }
    }

    /// Terminal completion. Subscribers receive `on_complete`; later
    /// emissions are ignored.
    pub fn complete(&self) {
        let drained: Vec<Subscriber<T>> = {
            let mut inner = self.inner.lock().expect("route data stream poisoned");
            if !matches!(inner.state, StreamState::Active) {
                return;
            }
            inner.state = StreamState::Completed;
            std::mem::take(&mut inner.subscribers)
        };

        for subscriber in drained {
            if subscriber.alive.load(Ordering::SeqCst) {
                (subscriber.on_complete)();
            }
        }
    }
}

/// Ручка отмены, возвращаемая [`RouteDataStream::subscribe`].
pub struct Subscription {
    alive: Arc<AtomicBool>,
    remove: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    fn active(alive: Arc<AtomicBool>, remove: impl FnOnce() + Send + 'static) -> Self {
        Self {
            alive,
            remove: Mutex::new(Some(Box::new(remove))),
        }
    }

    /// Handle for a subscription that terminated at registration time.
    fn settled() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(false)),
            remove: Mutex::new(None),
        }
    }

    /// Release the subscription. Idempotent; once it returns, no callback of
    /// this subscriber fires again, including for an emission in flight.
    pub fn unsubscribe(&self) {
        self.alive.store(false, Ordering::SeqCst);
        if let Some(remove) = self
            .remove
            .lock()
            .expect("subscription poisoned")
            .take()
        {
            remove();
        }
    }
}
