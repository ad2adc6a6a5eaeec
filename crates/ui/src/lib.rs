//! # UI
//!
//! The view layer: a pure function of the navigation state and the static
//! portfolio. The only things flowing back are `navigate` and `toggle_menu`.
//!
//! Hosts pick the location by providing a [`LocationHandle`] as root context;
//! without one the app runs on an in-memory location.

mod app;
mod components;
mod handle;
mod hooks;
pub mod links;

pub use crate::app::App;
pub use crate::handle::LocationHandle;
pub use crate::hooks::{Navigation, use_navigation};
