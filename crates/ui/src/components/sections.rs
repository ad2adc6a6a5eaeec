use crate::links::{mailto_href, tel_href};
use dioxus::prelude::*;
use folio_domain::PortfolioData;
use folio_domain::assets::{GITHUB_ICON, GMAIL_ICON, LINKEDIN_ICON, LOCATION_ICON, PHONE_ICON};

const PILL_LINK: &str = "inline-flex items-center gap-2 text-sm text-slate-100 bg-slate-700 hover:bg-indigo-600 transition-colors duration-200 px-4 py-2 rounded-full shadow-md";
const CONTACT_LINK: &str =
    "flex items-center gap-2 text-indigo-400 font-medium hover:text-indigo-300 transition-colors";
const CARD: &str = "bg-slate-800 rounded-xl shadow-lg border border-slate-700";

/// About + skills.
#[component]
pub(crate) fn HomeSection(portfolio: PortfolioData) -> Element {
    rsx! {
        section { id: "home", class: "space-y-16",
            AboutSection { portfolio }
            hr { class: "border-slate-700" }
            SkillsSection { portfolio }
        }
    }
}

#[component]
fn AboutSection(portfolio: PortfolioData) -> Element {
    rsx! {
        section { id: "about", class: "text-center py-12 md:py-24",
            div { class: "flex flex-col items-center",
                img {
                    src: portfolio.photo,
                    alt: "Profile picture of {portfolio.name}",
                    class: "w-36 h-36 md:w-48 md:h-48 rounded-full object-cover mb-6 shadow-2xl border-4 border-indigo-500",
                }
                h2 { class: "text-4xl md:text-5xl font-extrabold text-white mb-2", "{portfolio.name}" }
                p { class: "text-xl md:text-2xl text-indigo-400 font-semibold mb-1", "{portfolio.role}" }
                p { class: "text-lg font-medium text-slate-300 mb-4", "{portfolio.experience}" }
                p { class: "text-md md:text-lg max-w-2xl text-slate-300 leading-relaxed", "{portfolio.bio}" }
            }
        }
    }
}

#[component]
fn SkillsSection(portfolio: PortfolioData) -> Element {
    rsx! {
        section { id: "skills", class: "py-12 md:py-24",
            h2 { class: "text-3xl md:text-4xl font-bold text-center text-white mb-8", "My Skills" }
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for skill in portfolio.skills {
                    div { key: "{skill.name}", class: "{CARD} p-6",
                        h3 { class: "text-xl font-semibold mb-2 flex items-center gap-2 text-indigo-300",
                            "💻 {skill.name}"
                        }
                        p { class: "text-slate-400", "{skill.level}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ProjectsSection(portfolio: PortfolioData) -> Element {
    rsx! {
        section { id: "projects", class: "py-12 md:py-24",
            h2 { class: "text-3xl md:text-4xl font-bold text-center text-white mb-8", "My Projects" }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
                for project in portfolio.projects {
                    div {
                        key: "{project.title}",
                        class: "{CARD} overflow-hidden hover:shadow-2xl transition-shadow duration-300 ease-in-out",
                        div { class: "p-6",
                            h3 { class: "text-2xl font-bold text-indigo-300 mb-2", "{project.title}" }
                            p { class: "text-slate-400 mb-4", "{project.description}" }
                            div { class: "flex flex-wrap gap-2 mb-4",
                                for tech in project.tech_stack {
                                    span {
                                        key: "{tech}",
                                        class: "bg-slate-700 text-sm font-medium px-3 py-1 rounded-full text-indigo-200",
                                        "{tech}"
                                    }
                                }
                            }
                            div { class: "flex gap-4",
                                a {
                                    href: project.link,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "inline-flex items-center gap-2 text-indigo-400 hover:text-indigo-300 font-medium transition-colors",
                                    "🔗 Live Demo"
                                }
                                a {
                                    href: project.github,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "inline-flex items-center gap-2 text-slate-400 hover:text-slate-300 font-medium transition-colors",
                                    img { src: GITHUB_ICON, alt: "GitHub Logo", class: "w-6 h-6" }
                                    "GitHub"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ContactSection(portfolio: PortfolioData) -> Element {
    let contact = portfolio.contact;

    rsx! {
        section { id: "contact", class: "py-12 md:py-24 max-w-3xl mx-auto",
            h2 { class: "text-3xl md:text-4xl font-bold text-center text-white mb-8", "Get in Touch" }
            div { class: "{CARD} p-8 text-center",
                p { class: "text-slate-300 text-lg mb-6",
                    "I'm currently open to new opportunities. Feel free to reach out!"
                }
                div { class: "flex flex-col sm:flex-row justify-center gap-6 mb-8",
                    a { href: mailto_href(contact.email), class: CONTACT_LINK,
                        img { src: GMAIL_ICON, alt: "Gmail Logo", class: "w-6 h-6" }
                        "{contact.email}"
                    }
                    a { href: tel_href(contact.phone), class: CONTACT_LINK,
                        img { src: PHONE_ICON, alt: "Phone Logo", class: "w-6 h-6" }
                        "{contact.phone}"
                    }
                    span { class: "flex items-center gap-2 text-slate-400",
                        img { src: LOCATION_ICON, alt: "Location Logo", class: "w-6 h-6" }
                        "{contact.location}"
                    }
                }
                div { class: "flex justify-center gap-4 flex-wrap",
                    a {
                        href: contact.resume,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: PILL_LINK,
                        "📄 Resume"
                    }
                    a {
                        href: contact.github,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: PILL_LINK,
                        img { src: GITHUB_ICON, alt: "GitHub Logo", class: "w-6 h-6" }
                        "GitHub"
                    }
                    a {
                        href: contact.linkedin,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: PILL_LINK,
                        img { src: LINKEDIN_ICON, alt: "LinkedIn Logo", class: "w-6 h-6" }
                        "LinkedIn"
                    }
                }
            }
        }
    }
}
