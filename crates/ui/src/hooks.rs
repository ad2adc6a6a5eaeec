use crate::handle::LocationHandle;
use dioxus::prelude::*;
use folio_navigation::{LocationProvider, NavigationController, NavigationState, Page};

/// Copyable handle the components use to read and drive navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation {
    controller: Signal<NavigationController<LocationHandle>>,
}

impl Navigation {
    pub fn state(&self) -> NavigationState {
        self.controller.read().state()
    }

    pub fn page(&self) -> Page {
        self.controller.read().page()
    }

    pub fn is_menu_open(&self) -> bool {
        self.controller.read().is_menu_open()
    }

    pub fn navigate(mut self, page: Page) {
        self.controller.write().navigate(page);
    }

    pub fn toggle_menu(mut self) {
        self.controller.write().toggle_menu();
    }
}

/// Owns the navigation controller for the component tree.
///
/// Fragment changes arriving from the location (back/forward, manual edits)
/// are applied by a background task. The subscription is taken on first render
/// so changes made before the task first runs are not lost. The signal is only
/// written when the page really changes, so echoes of our own writes do not
/// re-render.
pub fn use_navigation() -> Navigation {
    let location = use_hook(|| try_consume_context::<LocationHandle>().unwrap_or_default());
    let changes = use_hook({
        let location = location.clone();
        move || location.subscribe()
    });

    let controller = use_signal(move || NavigationController::new(location));

    use_future(move || {
        let mut changes = changes.clone();
        let mut controller = controller;
        async move {
            while changes.changed().await.is_ok() {
                let stale = {
                    let current = controller.peek();
                    current.location_page() != current.page()
                };
                if stale {
                    controller.write().on_hash_change();
                }
            }
        }
    });

    Navigation { controller }
}
