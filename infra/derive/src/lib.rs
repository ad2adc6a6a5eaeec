#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used by the workspace crates.
//!
//! Only one macro lives here today: [`macro@folio_error`], which turns a plain
//! enum into an error type with context support. Examples are `ignore`d because
//! a proc-macro crate cannot use its own macros in doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and,
///   for every variant with a source, `Result<T, SourceError>`.
/// * `From<SourceError>` for variants holding a `source` field (or a field
///   tagged `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The item must be an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::folio_error;
/// use std::borrow::Cow;
///
/// #[folio_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, LoadError> {
///     std::fs::read_to_string("folio.toml").context("Reading site config")
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
