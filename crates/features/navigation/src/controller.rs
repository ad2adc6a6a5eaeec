use crate::fragment::resolve_fragment;
use crate::location::LocationProvider;
use folio_domain::Page;
use tracing::debug;

/// The pair of values the views render from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationState {
    pub page: Page,
    pub menu_open: bool,
}

/// Single source of truth for the current page and the mobile menu.
///
/// Every mutation goes through [`navigate`](Self::navigate),
/// [`on_hash_change`](Self::on_hash_change) or [`toggle_menu`](Self::toggle_menu).
#[derive(Debug)]
pub struct NavigationController<L> {
    location: L,
    state: NavigationState,
}

impl<L: LocationProvider> NavigationController<L> {
    /// Creates a controller and applies the fragment present at startup.
    pub fn new(location: L) -> Self {
        let page = resolve_fragment(&location.fragment());
        debug!(page = %page, "Navigation controller started");
        Self { location, state: NavigationState { page, menu_open: false } }
    }

    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.state.page
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.state.menu_open
    }

    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// The page the location currently points at, without applying it.
    #[must_use]
    pub fn location_page(&self) -> Page {
        resolve_fragment(&self.location.fragment())
    }

    /// Shows `page`, mirrors it into the fragment, and closes the menu.
    ///
    /// The fragment is left alone when it already names `page`.
    pub fn navigate(&mut self, page: Page) {
        self.state.page = page;
        self.state.menu_open = false;

        let current = self.location.fragment();
        if current.strip_prefix('#').unwrap_or(&current) != page.fragment() {
            self.location.set_fragment(page.fragment());
        }
        debug!(page = %page, "Navigated");
    }

    /// Re-reads the fragment after an external change.
    ///
    /// Returns `true` if the page changed. The menu state is untouched.
    pub fn on_hash_change(&mut self) -> bool {
        let page = self.location_page();
        if page == self.state.page {
            return false;
        }

        debug!(from = %self.state.page, to = %page, "Fragment changed");
        self.state.page = page;
        true
    }

    /// Flips the mobile menu and returns the new value.
    pub const fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        self.state.menu_open
    }
}
