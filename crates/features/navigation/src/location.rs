use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;
use tracing::trace;

/// Receiving end of a location's change notifications.
///
/// Wakes once per distinct fragment value; bursts coalesce to the latest one.
pub type FragmentReceiver = watch::Receiver<String>;

/// Capability to read, write, and observe the URL fragment.
pub trait LocationProvider {
    /// Current raw fragment text. A leading `#` is allowed.
    fn fragment(&self) -> String;

    /// Replaces the fragment.
    ///
    /// Writing the value already present must not notify subscribers.
    fn set_fragment(&self, fragment: &str);

    /// Subscribes to fragment changes made after this call.
    fn subscribe(&self) -> FragmentReceiver;
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn set_fragment(&self, fragment: &str) {
        (**self).set_fragment(fragment);
    }

    fn subscribe(&self) -> FragmentReceiver {
        (**self).subscribe()
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for Rc<T> {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn set_fragment(&self, fragment: &str) {
        (**self).set_fragment(fragment);
    }

    fn subscribe(&self) -> FragmentReceiver {
        (**self).subscribe()
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for Arc<T> {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn set_fragment(&self, fragment: &str) {
        (**self).set_fragment(fragment);
    }

    fn subscribe(&self) -> FragmentReceiver {
        (**self).subscribe()
    }
}

/// An in-process location: a fragment cell plus a change channel.
///
/// Clones share the same fragment, so a test (or the desktop shell) can keep a
/// handle and edit the fragment "externally" while a controller owns another.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    inner: Arc<MemoryInner>,
}

#[derive(Debug)]
struct MemoryInner {
    sender: watch::Sender<String>,
    writes: AtomicUsize,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryLocation {
    /// Creates a location that starts at `initial` (deep link).
    pub fn new(initial: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(initial.into());
        Self { inner: Arc::new(MemoryInner { sender, writes: AtomicUsize::new(0) }) }
    }

    #[must_use]
    pub fn fragment(&self) -> String {
        self.inner.sender.borrow().clone()
    }

    /// Stores `fragment`, notifying subscribers only if it differs from the current value.
    ///
    /// Returns whether the value changed.
    pub fn set_fragment(&self, fragment: &str) -> bool {
        let changed = self.inner.sender.send_if_modified(|current| {
            if current == fragment {
                false
            } else {
                fragment.clone_into(current);
                true
            }
        });

        if changed {
            self.inner.writes.fetch_add(1, Ordering::Relaxed);
            trace!(fragment, "Memory location updated");
        }
        changed
    }

    #[must_use]
    pub fn subscribe(&self) -> FragmentReceiver {
        self.inner.sender.subscribe()
    }

    /// Number of writes that actually changed the fragment.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.writes.load(Ordering::Relaxed)
    }
}

impl LocationProvider for MemoryLocation {
    fn fragment(&self) -> String {
        Self::fragment(self)
    }

    fn set_fragment(&self, fragment: &str) {
        Self::set_fragment(self, fragment);
    }

    fn subscribe(&self) -> FragmentReceiver {
        Self::subscribe(self)
    }
}
