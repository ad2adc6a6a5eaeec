//! The portfolio shown by every view. Edit this to change the site.

use folio_domain::assets::PROFILE_PHOTO;
use folio_domain::{Contact, PortfolioData, Project, Skill, SkillLevel};

pub const PORTFOLIO: PortfolioData = PortfolioData {
    name: "Akinwoleola Clinton",
    role: "Full-Stack Developer",
    experience: "2 Years of Experience",
    bio: "I am a passionate web developer dedicated to creating intuitive and visually \
          compelling digital experiences. I approach every project with grit and dedication, \
          committed to seeing challenges through to a polished conclusion. I am a lifelong \
          learner, constantly exploring new technologies to expand my skills and deliver \
          better results. I specialize in the MERN stack and love creating beautiful and \
          performant user interfaces.",
    photo: PROFILE_PHOTO,
    skills: SKILLS,
    projects: PROJECTS,
    contact: CONTACT,
};

const SKILLS: &[Skill] = &[
    Skill { name: "React", level: SkillLevel::Expert },
    Skill { name: "JavaScript", level: SkillLevel::Expert },
    Skill { name: "Node.js", level: SkillLevel::Intermediate },
    Skill { name: "Tailwind CSS", level: SkillLevel::Expert },
    Skill { name: "MongoDB", level: SkillLevel::Beginner },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Multi-Step Form App",
        description: "A responsive multi-step form built to demonstrate user data collection \
                      and validation. Features clear navigation and a clean, modern UI.",
        tech_stack: &["React", "Tailwind CSS", "Vite"],
        link: "https://multi-stepss.pages.dev/",
        github: "https://github.com/Clinton6801/multi-step.git",
    },
    Project {
        title: "E-commerce Storefront",
        description: "A modern e-commerce platform featuring product listings, a shopping \
                      cart, and a checkout flow. Built with a focus on a seamless user \
                      experience.",
        tech_stack: &["React", "Node.js", "MongoDB", "Express"],
        link: "https://e-commerce-d4q.pages.dev/",
        github: "https://github.com/Clinton6801/e-commerce.git",
    },
    Project {
        title: "Interactive Tic-Tac-Toe Game",
        description: "A classic Tic-Tac-Toe game created with React to showcase state \
                      management and component-based architecture. Includes a win condition \
                      and turn-based logic.",
        tech_stack: &["React", "JavaScript", "CSS"],
        link: "https://tic-tac-toe-8tg.pages.dev/",
        github: "https://github.com/Clinton6801/tic-tac-toe.git",
    },
    Project {
        title: "Movie Rating App",
        description: "This application is a dynamic movie rating platform that seamlessly \
                      integrates with a third-party API to provide users with up-to-date movie \
                      information. Users can browse a comprehensive list of films, view \
                      detailed descriptions, cast information, and see real-time ratings.",
        tech_stack: &["React", "JavaScript", "CSS"],
        link: "https://moviess-rcu.pages.dev/",
        github: "https://github.com/Clinton6801/tic-tac-toe.git",
    },
];

const CONTACT: Contact = Contact {
    email: "akinwoleolaclinton@gmail.com",
    phone: "+234 903 778 9995",
    linkedin: "https://linkedin.com/in/akinwoleolaclinton",
    github: "https://github.com/Clinton6801",
    location: "Lagos, Nigeria",
    // Placeholder until the real document is published.
    resume: "https://docs.google.com/document/d/1234567890/edit?usp=sharing",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_keep_declaration_order() {
        let names: Vec<_> = PORTFOLIO.skills.iter().map(|s| s.name).collect();
        assert_eq!(names, ["React", "JavaScript", "Node.js", "Tailwind CSS", "MongoDB"]);
        let experts = PORTFOLIO.skills.iter().filter(|s| s.level == SkillLevel::Expert).count();
        assert_eq!(experts, 3);
    }

    #[test]
    fn every_project_has_links_and_a_stack() {
        assert_eq!(PORTFOLIO.projects.len(), 4);
        for project in PORTFOLIO.projects {
            assert!(project.link.starts_with("https://"), "{}", project.title);
            assert!(project.github.starts_with("https://github.com/"), "{}", project.title);
            assert!(!project.tech_stack.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn bio_is_one_paragraph() {
        assert!(!PORTFOLIO.bio.contains("  "));
        assert!(!PORTFOLIO.bio.contains('\n'));
    }
}
