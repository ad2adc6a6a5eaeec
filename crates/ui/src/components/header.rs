use crate::hooks::Navigation;
use crate::links::menu_panel_class;
use dioxus::prelude::*;
use folio_domain::Page;

const HAMBURGER_PATH: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";

/// Sticky header: brand, desktop links, mobile toggle and dropdown.
#[component]
pub(crate) fn Header(navigation: Navigation) -> Element {
    let open = navigation.is_menu_open();
    let icon = if open { CLOSE_PATH } else { HAMBURGER_PATH };

    rsx! {
        header { class: "sticky top-0 z-50 w-full bg-slate-900 bg-opacity-90 backdrop-blur-md shadow-lg py-4",
            nav { class: "container mx-auto px-4 md:px-8 flex justify-between items-center",
                h1 { class: "text-2xl font-bold text-indigo-400",
                    button { onclick: move |_| navigation.navigate(Page::Home), "Clinton's Portfolio" }
                }
                div { class: "md:hidden",
                    button {
                        class: "text-slate-100 focus:outline-none p-2",
                        aria_label: if open { "Close menu" } else { "Open menu" },
                        onclick: move |_| navigation.toggle_menu(),
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            class: "h-6 w-6",
                            fill: "none",
                            view_box: "0 0 24 24",
                            stroke: "currentColor",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: icon,
                            }
                        }
                    }
                }
                div { class: "hidden md:flex gap-8",
                    for page in Page::all() {
                        button {
                            key: "{page}",
                            class: "text-lg font-medium hover:text-indigo-400 transition-colors duration-200",
                            onclick: move |_| navigation.navigate(page),
                            "{page.label()}"
                        }
                    }
                }
            }
            div { class: menu_panel_class(open),
                div { class: "flex flex-col items-center gap-4 py-4",
                    for page in Page::all() {
                        button {
                            key: "{page}",
                            class: "text-lg font-medium w-full text-center hover:text-indigo-400 transition-colors duration-200",
                            onclick: move |_| navigation.navigate(page),
                            "{page.label()}"
                        }
                    }
                }
            }
        }
    }
}
