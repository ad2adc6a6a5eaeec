//! # Navigation
//!
//! Keeps "which page is shown" and "is the mobile menu open" consistent with the
//! URL fragment.
//!
//! The controller never touches a browser directly. It talks to a
//! [`LocationProvider`], which can be the in-memory [`MemoryLocation`] (tests,
//! desktop shell) or, with the `web` feature on `wasm32`, `BrowserLocation`.
//!
//! ## Example
//!
//! ```rust
//! use folio_navigation::{MemoryLocation, NavigationController, Page};
//!
//! let location = MemoryLocation::new("#projects");
//! let mut nav = NavigationController::new(location.clone());
//! assert_eq!(nav.page(), Page::Projects);
//!
//! nav.toggle_menu();
//! nav.navigate(Page::Contact);
//! assert_eq!(location.fragment(), "contact");
//! assert!(!nav.is_menu_open());
//!
//! location.set_fragment("#bogus");
//! nav.on_hash_change();
//! assert_eq!(nav.page(), Page::Home);
//! ```

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod browser;
mod controller;
mod error;
mod fragment;
mod location;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use crate::browser::BrowserLocation;
pub use crate::controller::{NavigationController, NavigationState};
pub use crate::error::{NavigationError, NavigationErrorExt};
pub use crate::fragment::{parse_fragment, resolve_fragment};
pub use crate::location::{FragmentReceiver, LocationProvider, MemoryLocation};
pub use folio_domain::Page;
