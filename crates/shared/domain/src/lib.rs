//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod assets;
pub mod config;
pub mod page;
pub mod portfolio;

pub use page::Page;
pub use portfolio::{Contact, PortfolioData, Project, Skill, SkillLevel};
