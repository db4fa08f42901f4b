//! Constant page content. Everything here lives for the whole process and is
//! only ever read by the renderer.

use crate::view_state::ThemeMode;

/// Icon reference. Resolved to inline SVG so the page needs no icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    User,
    Code,
    Trophy,
    Image,
    Mail,
    Database,
    Globe,
    Star,
    Sun,
    Moon,
    Download,
    ArrowUpRight,
    Github,
    Linkedin,
}

impl Icon {
    pub const ALL: [Icon; 14] = [
        Self::User,
        Self::Code,
        Self::Trophy,
        Self::Image,
        Self::Mail,
        Self::Database,
        Self::Globe,
        Self::Star,
        Self::Sun,
        Self::Moon,
        Self::Download,
        Self::ArrowUpRight,
        Self::Github,
        Self::Linkedin,
    ];

    /// Inner markup of a 24x24 stroked SVG (lucide outlines, ISC licensed).
    pub fn markup(self) -> &'static str {
        match self {
            Self::User => r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
            Self::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            Self::Trophy => r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/><path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/><path d="M4 22h16"/><path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/><path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/><path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
            Self::Image => r#"<rect width="18" height="18" x="3" y="3" rx="2" ry="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"/>"#,
            Self::Mail => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            Self::Database => r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#,
            Self::Globe => r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
            Self::Star => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
            Self::Sun => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
            Self::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
            Self::Download => r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#,
            Self::ArrowUpRight => r#"<path d="M7 7h10v10"/><path d="M7 17 17 7"/>"#,
            Self::Github => r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            Self::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
        }
    }
}

/// Icon on the theme button: the sun switches to light, the moon back to dark.
pub fn theme_toggle_icon(theme: ThemeMode) -> Icon {
    if theme.is_dark() {
        Icon::Sun
    } else {
        Icon::Moon
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub icon: Icon,
    pub anchor: &'static str,
}

impl NavEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub tools: &'static str,
    /// Proficiency in percent.
    pub level: u8,
    pub icon: Icon,
}

impl SkillEntry {
    pub fn level_label(&self) -> String {
        format!("{}%", self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub year: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryEntry {
    pub title: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub given_name: &'static str,
    pub family_name: &'static str,
    pub mark: &'static str,
    pub headline: &'static str,
    pub about: &'static str,
    pub portrait: &'static str,
    pub resume: &'static str,
}

impl Profile {
    /// Letters of the given name, in the order the hero animates them.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.given_name.chars()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// Outbound contact targets. Opaque strings, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    given_name: "BHAVANA",
    family_name: "KAMATAGI",
    mark: "B",
    headline: "Creative Architect",
    about: "I am a developer who bridges the gap between complex backend logic and pixel-perfect frontend design. Based in India, I focus on creating interfaces that tell a story and feel like magic.",
    portrait: "https://lh3.googleusercontent.com/d/1zXvcFVN7fDzU_vFaliaG6Mv6OzXX8K8f",
    resume: "/resume.pdf",
};

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        name: "About",
        icon: Icon::User,
        anchor: "about",
    },
    NavEntry {
        name: "Skills",
        icon: Icon::Code,
        anchor: "skills",
    },
    NavEntry {
        name: "Wins",
        icon: Icon::Trophy,
        anchor: "achievements",
    },
    NavEntry {
        name: "Gallery",
        icon: Icon::Image,
        anchor: "gallery",
    },
    NavEntry {
        name: "Contact",
        icon: Icon::Mail,
        anchor: "contact",
    },
];

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry {
        name: "Frontend",
        tools: "React, Tailwind, Framer",
        level: 95,
        icon: Icon::Code,
    },
    SkillEntry {
        name: "Backend",
        tools: "Node.js, Express, SQL",
        level: 80,
        icon: Icon::Database,
    },
    SkillEntry {
        name: "UI/UX",
        tools: "Figma",
        level: 85,
        icon: Icon::Globe,
    },
    SkillEntry {
        name: "ML",
        tools: "pycharm, jupitor, colab",
        level: 70,
        icon: Icon::Star,
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Ideathon 2025 Winner",
        description: "Awarded 1st Place",
        year: 2025,
    },
    Achievement {
        title: "Google WTM Lead",
        description: "Empowering women in tech",
        year: 2025,
    },
    Achievement {
        title: "Top University Ranker",
        description: "Academic Excellence",
        year: 2025,
    },
];

pub const GALLERY: &[GalleryEntry] = &[
    GalleryEntry {
        title: "Yoga & Mindfulness",
        image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?auto=format&fit=crop&q=80&w=800",
    },
    GalleryEntry {
        title: "Vocal Arts / Singing",
        image: "https://images.unsplash.com/photo-1516280440614-37939bbacd81?auto=format&fit=crop&q=80&w=800",
    },
    GalleryEntry {
        title: "Nature",
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?auto=format&fit=crop&q=80&w=800",
    },
    GalleryEntry {
        title: "Software Development",
        image: "https://images.unsplash.com/photo-1484417894907-623942c8ee29?auto=format&fit=crop&q=80&w=800",
    },
];

pub const INTERESTS: &[&str] = &["Yoga", "Singing", "AI Research"];

pub const CONTACT: Contact = Contact {
    email: "bhavanask60@gmail.com",
    github: "https://github.com/Bha-nu12",
    linkedin: "https://www.linkedin.com/in/bhavana-kamatagi-bb633b281",
};

pub fn nav_entry(anchor: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|e| e.anchor == anchor)
}
