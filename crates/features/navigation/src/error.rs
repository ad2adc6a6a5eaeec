use std::borrow::Cow;

/// Errors raised around the navigation seam.
///
/// The controller itself never returns these; they surface from strict fragment
/// parsing and from constructing platform location providers.
#[folio_derive::folio_error]
pub enum NavigationError {
    /// The fragment does not name one of the recognized pages.
    #[error("Unknown page{}: {message}", format_context(.context))]
    UnknownPage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The host offers no location object (e.g. no `window`).
    #[error("Location unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Reading or writing the host location failed.
    #[error("Location error{}: {message}", format_context(.context))]
    Location { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal navigation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
