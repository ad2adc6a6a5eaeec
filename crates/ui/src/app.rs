use crate::components::{ContactSection, Footer, Header, HomeSection, ProjectsSection};
use crate::hooks::use_navigation;
use dioxus::prelude::*;
use folio_domain::Page;
use folio_kernel::content::PORTFOLIO;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Root component.
#[component]
pub fn App() -> Element {
    let nav = use_navigation();
    let title = format!("{} | Portfolio", PORTFOLIO.name);

    rsx! {
        document::Title { "{title}" }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen bg-slate-900 text-slate-100 font-sans antialiased flex flex-col items-center",
            Header { navigation: nav }
            main { class: "container mx-auto p-4 md:p-8 flex-grow",
                {
                    match nav.page() {
                        Page::Home => rsx! { HomeSection { portfolio: PORTFOLIO } },
                        Page::Projects => rsx! { ProjectsSection { portfolio: PORTFOLIO } },
                        Page::Contact => rsx! { ContactSection { portfolio: PORTFOLIO } },
                    }
                }
            }
            Footer { name: PORTFOLIO.name }
        }
    }
}
