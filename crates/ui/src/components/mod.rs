mod footer;
mod header;
mod sections;

pub(crate) use footer::Footer;
pub(crate) use header::Header;
pub(crate) use sections::{ContactSection, HomeSection, ProjectsSection};
