use chrono::{Datelike, Local};
use dioxus::prelude::*;

#[component]
pub(crate) fn Footer(name: &'static str) -> Element {
    let year = Local::now().year();

    rsx! {
        footer { class: "w-full bg-slate-900 py-6 text-center text-slate-500 text-sm",
            p { "© {year} {name}. All rights reserved." }
        }
    }
}
