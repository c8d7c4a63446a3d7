//! Location state: the one mutable value in the system.
//!
//! [`Router`] owns the current [`Location`], offers `navigate` for
//! app-driven changes, and reacts to host-driven changes (back/forward)
//! through a listener registered on the [`History`] backend. The listener
//! registration is scoped: dropping the returned guard deregisters it.
//!
//! Whenever the stored location leaves the route surface it is forced back
//! to the default page. This guards against stale or hand-edited external
//! URLs and runs after every location change, app- or host-driven.

use super::location::{DEFAULT_PATH, Location};
use super::{View, is_routable, resolve};
use crate::content::Registry;
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Identifier handed out by [`History::subscribe`] and [`Router::subscribe`].
pub type ListenerId = usize;

type Listener = Box<dyn Fn() + Send + Sync>;
type LocationWatcher = Box<dyn Fn(&Location) + Send + Sync>;

// ============================================================================
// History backend
// ============================================================================

/// The host environment's history stack.
///
/// In a browser this is `window.history`/`window.location`; tests and the
/// CLI use [`MemoryHistory`]. `push` makes a navigation externally
/// observable without notifying listeners (matching `pushState`);
/// listeners only fire for host-driven movement (back/forward).
pub trait History: Send + Sync {
    /// Current path component.
    fn path(&self) -> String;

    /// Current query string, without the leading `?`.
    fn query(&self) -> String;

    /// Push a new entry onto the stack.
    fn push(&self, path: &str);

    /// Register a callback fired after host-driven changes.
    fn subscribe(&self, listener: Listener) -> ListenerId;

    /// Remove a previously registered callback.
    fn unsubscribe(&self, id: ListenerId);
}

/// In-memory history stack.
#[derive(Default)]
pub struct MemoryHistory {
    stack: Mutex<Stack>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_id: AtomicUsize,
}

struct Stack {
    /// Full entries as the address bar would show them (`path?query`).
    entries: Vec<String>,
    index: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self {
            entries: vec!["/".to_owned()],
            index: 0,
        }
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a specific address, e.g. `/?/writings/x` for the
    /// static-host redirect form.
    pub fn with_entry(entry: &str) -> Self {
        let history = Self::new();
        history.stack.lock().entries[0] = entry.to_owned();
        history
    }

    /// The full current entry, for assertions and logging.
    pub fn current_entry(&self) -> String {
        let stack = self.stack.lock();
        stack.entries[stack.index].clone()
    }

    /// Host-driven: step back one entry and notify listeners.
    pub fn back(&self) {
        let moved = {
            let mut stack = self.stack.lock();
            if stack.index == 0 {
                false
            } else {
                stack.index -= 1;
                true
            }
        };
        if moved {
            self.notify();
        }
    }

    /// Host-driven: step forward one entry and notify listeners.
    pub fn forward(&self) {
        let moved = {
            let mut stack = self.stack.lock();
            if stack.index + 1 >= stack.entries.len() {
                false
            } else {
                stack.index += 1;
                true
            }
        };
        if moved {
            self.notify();
        }
    }

    fn notify(&self) {
        for (_, listener) in self.listeners.lock().iter() {
            listener();
        }
    }
}

impl History for MemoryHistory {
    fn path(&self) -> String {
        let entry = self.current_entry();
        match entry.split_once('?') {
            Some((path, _)) => path.to_owned(),
            None => entry,
        }
    }

    fn query(&self) -> String {
        let entry = self.current_entry();
        match entry.split_once('?') {
            Some((_, query)) => query.to_owned(),
            None => String::new(),
        }
    }

    fn push(&self, path: &str) {
        let mut stack = self.stack.lock();
        let index = stack.index;
        // A push discards any forward entries, like the browser stack
        stack.entries.truncate(index + 1);
        stack.entries.push(path.to_owned());
        stack.index += 1;
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.lock().retain(|(lid, _)| *lid != id);
    }
}

// ============================================================================
// Router state
// ============================================================================

/// Owns the current location and the subscriptions around it.
pub struct Router {
    history: Arc<dyn History>,
    registry: &'static Registry,
    current: Mutex<Location>,
    watchers: Mutex<Vec<(ListenerId, LocationWatcher)>>,
    next_watcher: AtomicUsize,
}

impl Router {
    /// Read the startup location from the history backend (including the
    /// legacy redirect decode) and self-correct it onto the route surface.
    pub fn new(history: Arc<dyn History>, registry: &'static Registry) -> Arc<Self> {
        let initial = Location::from_env(&history.path(), &history.query());
        let router = Arc::new(Self {
            history,
            registry,
            current: Mutex::new(initial),
            watchers: Mutex::new(Vec::new()),
            next_watcher: AtomicUsize::new(0),
        });
        router.heal();
        router
    }

    /// The current location.
    pub fn current(&self) -> Location {
        self.current.lock().clone()
    }

    /// Resolve the current location to a view.
    pub fn resolve_current(&self) -> View {
        resolve(&self.current(), self.registry)
    }

    /// App-driven navigation: push onto the history stack (so the address
    /// bar and back/forward observe it), then update the location
    /// synchronously.
    pub fn navigate(&self, path: &str) {
        self.history.push(path);
        self.set_location(Location::new(path));
    }

    /// Host-driven navigation landed: re-read the backend path.
    pub fn sync(&self) {
        let path = self.history.path();
        self.set_location(Location::new(&path));
    }

    /// Register the back/forward listener on the history backend.
    ///
    /// The registration lives exactly as long as the returned guard.
    pub fn listen(self: &Arc<Self>) -> HistoryGuard {
        let weak = Arc::downgrade(self);
        let id = self.history.subscribe(Box::new(move || {
            if let Some(router) = weak.upgrade() {
                router.sync();
            }
        }));
        HistoryGuard {
            history: Arc::clone(&self.history),
            id,
        }
    }

    /// Watch location changes (re-render hook). Watchers must not call
    /// `subscribe`/`unsubscribe` from inside the callback.
    pub fn subscribe(&self, watcher: impl Fn(&Location) + Send + Sync + 'static) -> ListenerId {
        let id = self.next_watcher.fetch_add(1, Ordering::Relaxed);
        self.watchers.lock().push((id, Box::new(watcher)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.watchers.lock().retain(|(wid, _)| *wid != id);
    }

    fn set_location(&self, location: Location) {
        *self.current.lock() = location.clone();

        for (_, watcher) in self.watchers.lock().iter() {
            watcher(&location);
        }

        self.heal();
    }

    /// Force the location back onto the route surface. Recurses at most
    /// once: the default page is always routable.
    fn heal(&self) {
        if !is_routable(&self.current()) {
            self.navigate(DEFAULT_PATH);
        }
    }
}

/// Scoped history subscription; deregisters on drop.
pub struct HistoryGuard {
    history: Arc<dyn History>,
    id: ListenerId,
}

impl Drop for HistoryGuard {
    fn drop(&mut self) {
        self.history.unsubscribe(self.id);
    }
}
