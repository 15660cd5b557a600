//! Static portfolio content shown by the views

use serde::Serialize;

/// Stack used by the "Generate Idea" button when the caller has no preference
pub const DEFAULT_IDEA_STACK: [&str; 3] = ["HTML5", "Modern CSS", "Vanilla JavaScript"];

/// Background handed to the chat assistant as context
pub const DEVELOPER_CONTEXT: &str = "I am a new developer focused on simple, clean web design using vanilla technologies and modern CSS. I value accessibility and performance.";

pub const CONTACT_EMAIL: &str = "hello@minimalistdev.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        id: "1",
        title: "Minimal Clock",
        description: "A precise, dark-themed analog clock built entirely with vanilla CSS and minimal JS logic.",
        tags: &["HTML", "CSS", "JavaScript"],
        image_url: "https://picsum.photos/seed/clock/600/400",
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: "2",
        title: "Typo Landing",
        description: "Focusing on typography and whitespace to create a high-converting agency landing page.",
        tags: &["Tailwind", "Responsive", "HTML"],
        image_url: "https://picsum.photos/seed/landing/600/400",
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: "3",
        title: "Recipe Deck",
        description: "An interactive grid of cards for foodies, featuring smooth transitions and search filtering.",
        tags: &["JS Filters", "Grid", "Flexbox"],
        image_url: "https://picsum.photos/seed/recipe/600/400",
        demo_url: "#",
        github_url: "#",
    },
];

static SKILLS: [Skill; 6] = [
    Skill { name: "HTML5", icon: "fa-brands fa-html5", color: "text-orange-500" },
    Skill { name: "CSS3", icon: "fa-brands fa-css3-alt", color: "text-blue-500" },
    Skill { name: "JavaScript", icon: "fa-brands fa-js", color: "text-yellow-500" },
    Skill { name: "Tailwind CSS", icon: "fa-solid fa-wind", color: "text-sky-500" },
    Skill { name: "Responsive Design", icon: "fa-solid fa-mobile-screen", color: "text-indigo-500" },
    Skill { name: "Git & GitHub", icon: "fa-brands fa-github", color: "text-slate-800" },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn skills() -> &'static [Skill] {
    &SKILLS
}

/// Look up a project by its id
pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
