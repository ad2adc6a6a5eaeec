//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it owns the portfolio content and config loading.
//!
//! ## Content
//! ```rust
//! use folio_kernel::content::PORTFOLIO;
//!
//! assert_eq!(PORTFOLIO.projects.len(), 4);
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use folio_kernel::config::load_config;
//! use folio_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("folio.toml")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod content;

pub use folio_domain as domain;
