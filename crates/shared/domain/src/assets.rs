//! Relative paths of the static images the views reference.
//!
//! They are resolved by the host (browser or webview) against the page URL.

pub const PROFILE_PHOTO: &str = "./clinton.jpg";
pub const GITHUB_ICON: &str = "./github-logo-icon.png";
pub const GMAIL_ICON: &str = "./gmail.png";
pub const PHONE_ICON: &str = "./calll.png";
pub const LOCATION_ICON: &str = "./location.png";
pub const LINKEDIN_ICON: &str = "./linkedln.png";
