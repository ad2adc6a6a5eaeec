//! The three pages reachable from the navigation bar.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// A navigable page.
///
/// The string form is the URL fragment spelling (`home`, `projects`, `contact`),
/// matched exactly and case-sensitively by [`std::str::FromStr`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Projects,
    Contact,
}

impl Page {
    /// Fragment spelling of the page.
    #[must_use]
    pub fn fragment(self) -> &'static str {
        self.into()
    }

    /// Label shown on the navigation buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// All pages in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
