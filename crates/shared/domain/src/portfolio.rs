//! Read-only portfolio content records.
//!
//! Everything borrows `'static` data so the whole portfolio can be a `const`.

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioData {
    pub name: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub contact: Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

/// A gallery entry with a live demo link and a repository link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub link: &'static str,
    pub github: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub location: &'static str,
    pub resume: &'static str,
}
