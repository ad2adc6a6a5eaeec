//! Browser build. Serve with `dx serve --platform web`.

use dioxus::prelude::*;
use folio_ui::{App, LocationHandle};

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        // A logger may already be installed by the launcher.
        tracing::debug!(error = %err, "Logger already initialized");
    }

    LaunchBuilder::web().with_context_provider(|| Box::new(location())).launch(App);
}

#[cfg(target_arch = "wasm32")]
fn location() -> LocationHandle {
    match folio_navigation::BrowserLocation::new() {
        Ok(browser) => LocationHandle::new(browser),
        Err(err) => {
            tracing::warn!(error = %err, "Falling back to in-memory location");
            LocationHandle::default()
        },
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn location() -> LocationHandle {
    LocationHandle::default()
}
