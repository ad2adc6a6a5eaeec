//! Small string helpers shared by the views.

const MENU_PANEL_BASE: &str =
    "md:hidden absolute inset-x-0 top-full z-40 bg-slate-800 shadow-lg transition-all duration-300 ease-in-out";

#[must_use]
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// `tel:` link with the spacing removed from the number.
#[must_use]
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// Classes of the mobile dropdown for the given menu state.
#[must_use]
pub fn menu_panel_class(open: bool) -> String {
    let visibility =
        if open { "block opacity-100 translate-y-0" } else { "hidden opacity-0 -translate-y-full" };
    format!("{MENU_PANEL_BASE} {visibility}")
}
