use crate::error::NavigationError;
use folio_domain::Page;
use std::str::FromStr;
use tracing::debug;

const DELIMITER: char = '#';

/// Strictly parses raw fragment text into a [`Page`].
///
/// One leading `#` is stripped; the remainder must match a page identifier
/// exactly (case-sensitive, no trimming).
///
/// # Errors
/// Returns [`NavigationError::UnknownPage`] for anything else, including the
/// empty fragment.
pub fn parse_fragment(raw: &str) -> Result<Page, NavigationError> {
    let fragment = raw.strip_prefix(DELIMITER).unwrap_or(raw);
    Page::from_str(fragment).map_err(|_| NavigationError::UnknownPage {
        message: fragment.to_owned().into(),
        context: None,
    })
}

/// Resolves raw fragment text to a page, falling back to [`Page::default`].
pub fn resolve_fragment(raw: &str) -> Page {
    parse_fragment(raw).unwrap_or_else(|err| {
        if !raw.is_empty() && raw != "#" {
            debug!(fragment = raw, error = %err, "Unrecognized fragment, using default page");
        }
        Page::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_a_single_delimiter() {
        assert_eq!(parse_fragment("#contact").ok(), Some(Page::Contact));
        assert_eq!(parse_fragment("contact").ok(), Some(Page::Contact));
        assert!(parse_fragment("##contact").is_err());
    }

    #[test]
    fn unknown_fragments_carry_the_rejected_text() {
        let err = parse_fragment("#bogus").expect_err("not a page");
        assert!(matches!(err, NavigationError::UnknownPage { ref message, .. } if message == "bogus"));
        assert_eq!(err.to_string(), "Unknown page: bogus");
    }

    #[test]
    fn resolution_defaults_to_home() {
        assert_eq!(resolve_fragment(""), Page::Home);
        assert_eq!(resolve_fragment("#"), Page::Home);
        assert_eq!(resolve_fragment("#HOME"), Page::Home);
        assert_eq!(resolve_fragment("#projects/"), Page::Home);
        assert_eq!(resolve_fragment("#projects"), Page::Projects);
    }
}
