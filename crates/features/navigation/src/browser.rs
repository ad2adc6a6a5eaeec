use crate::error::{NavigationError, NavigationErrorExt};
use crate::location::{FragmentReceiver, LocationProvider};
use tokio::sync::watch;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Location, Window};

const HASH_CHANGE: &str = "hashchange";

/// Location provider bound to `window.location.hash`.
///
/// A `hashchange` listener feeds the change channel; it is removed on drop.
pub struct BrowserLocation {
    window: Window,
    location: Location,
    sender: watch::Sender<String>,
    listener: Closure<dyn FnMut()>,
}

impl std::fmt::Debug for BrowserLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserLocation").field("fragment", &*self.sender.borrow()).finish()
    }
}

impl BrowserLocation {
    /// Binds to the current window and starts listening for `hashchange`.
    ///
    /// # Errors
    /// Returns [`NavigationError::Unavailable`] outside a browser window, or
    /// [`NavigationError::Location`] if the listener cannot be installed.
    pub fn new() -> Result<Self, NavigationError> {
        let window = web_sys::window().ok_or_else(|| NavigationError::Unavailable {
            message: "no global `window`".into(),
            context: None,
        })?;
        let location = window.location();

        let (sender, _) = watch::channel(read_hash(&location));

        let listener = {
            let location = location.clone();
            let sender = sender.clone();
            Closure::<dyn FnMut()>::new(move || {
                let hash = read_hash(&location);
                debug!(fragment = %hash, "hashchange");
                publish(&sender, &hash);
            })
        };

        window
            .add_event_listener_with_callback(HASH_CHANGE, listener.as_ref().unchecked_ref())
            .map_err(|e| NavigationError::Location {
                message: format!("{e:?}").into(),
                context: None,
            })
            .context("Installing hashchange listener")?;

        Ok(Self { window, location, sender, listener })
    }
}

impl LocationProvider for BrowserLocation {
    fn fragment(&self) -> String {
        read_hash(&self.location)
    }

    fn set_fragment(&self, fragment: &str) {
        if let Err(e) = self.location.set_hash(fragment) {
            warn!(fragment, error = ?e, "Failed to write location hash");
            return;
        }
        // The browser reports the hash with its leading `#`.
        publish(&self.sender, &read_hash(&self.location));
    }

    fn subscribe(&self) -> FragmentReceiver {
        self.sender.subscribe()
    }
}

impl Drop for BrowserLocation {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(HASH_CHANGE, self.listener.as_ref().unchecked_ref());
    }
}

fn read_hash(location: &Location) -> String {
    location.hash().unwrap_or_else(|e| {
        warn!(error = ?e, "Failed to read location hash");
        String::new()
    })
}

fn publish(sender: &watch::Sender<String>, hash: &str) {
    sender.send_if_modified(|current| {
        if current == hash {
            false
        } else {
            hash.clone_into(current);
            true
        }
    });
}
