use folio_navigation::{FragmentReceiver, LocationProvider, MemoryLocation};
use std::fmt;
use std::rc::Rc;

/// Type-erased, cheaply cloneable location shared through the Dioxus context.
#[derive(Clone)]
pub struct LocationHandle(Rc<dyn LocationProvider>);

impl LocationHandle {
    pub fn new(provider: impl LocationProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

impl Default for LocationHandle {
    fn default() -> Self {
        Self::new(MemoryLocation::default())
    }
}

impl fmt::Debug for LocationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocationHandle").field(&self.0.fragment()).finish()
    }
}

impl LocationProvider for LocationHandle {
    fn fragment(&self) -> String {
        self.0.fragment()
    }

    fn set_fragment(&self, fragment: &str) {
        self.0.set_fragment(fragment);
    }

    fn subscribe(&self) -> FragmentReceiver {
        self.0.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_navigation::{NavigationController, Page};

    #[test]
    fn default_handle_starts_empty() {
        assert_eq!(LocationHandle::default().fragment(), "");
    }

    #[test]
    fn handle_shares_the_wrapped_location() {
        let memory = MemoryLocation::new("#projects");
        let handle = LocationHandle::new(memory.clone());
        let mut nav = NavigationController::new(handle.clone());

        assert_eq!(nav.page(), Page::Projects);
        nav.navigate(Page::Contact);
        assert_eq!(memory.fragment(), "contact");
        assert_eq!(format!("{handle:?}"), "LocationHandle(\"contact\")");
    }
}
