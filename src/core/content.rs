//! Static page content
//!
//! Copy, links and per-item accents for every section. Nothing here is
//! computed; sections iterate these arrays in order.

/// Page metadata for the document head and social previews
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub locale: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    title: "Jagan Muralitharan | AI & Embedded Systems Engineer",
    description: "Computer Engineering student at Virginia Tech specializing in AI/ML, Embedded Systems, and Robotics. Building the future through innovative technology.",
    short_description: "Computer Engineering student at Virginia Tech specializing in AI/ML, Embedded Systems, and Robotics.",
    keywords: &[
        "Jagan Muralitharan",
        "Virginia Tech",
        "Computer Engineering",
        "AI",
        "Machine Learning",
        "Embedded Systems",
        "Robotics",
        "Portfolio",
    ],
    author: "Jagan Muralitharan",
    url: "https://jaganm.dev",
    site_name: "Jagan Muralitharan Portfolio",
    locale: "en_US",
};

pub const INITIALS: &str = "JM";
pub const RESUME_URL: &str = "/resume.pdf";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/jagmljk";

pub struct FocusArea {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        icon: "lightning",
        title: "AI & Machine Learning",
        description: "Developing intelligent systems with deep learning and computer vision",
    },
    FocusArea {
        icon: "chip",
        title: "Embedded Systems",
        description: "Designing real-time firmware for robotics and IoT applications",
    },
    FocusArea {
        icon: "code",
        title: "Full-Stack Development",
        description: "Building scalable web applications with modern technologies",
    },
];

pub struct Experience {
    pub icon: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Tailwind gradient stops
    pub color: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        icon: "sparkles",
        title: "AI Research",
        company: "Sanghani Center for AI",
        location: "Virginia Tech",
        period: "Oct 2025 - Present",
        description: "Developing intelligent image generation systems combining large language models with diffusion models. Researching novel approaches to controllable generation and multi-modal understanding.",
        tags: &["LLMs", "Diffusion Models", "PyTorch", "Computer Vision"],
        color: "from-purple-500 to-pink-500",
    },
    Experience {
        icon: "cog",
        title: "Robotics Engineer",
        company: "Bioinspired Technology Center",
        location: "Virginia Tech",
        period: "May 2025 - Aug 2025",
        description: "Designed and implemented real-time embedded firmware for robotic actuators. Developed control algorithms for precise motor control and sensor integration in bioinspired robotic systems.",
        tags: &["Embedded C", "RTOS", "Control Systems", "Robotics"],
        color: "from-blue-500 to-cyan-500",
    },
    Experience {
        icon: "lightning",
        title: "Electrical Lead",
        company: "The Diggeridoos",
        location: "Virginia Tech Robotics Club",
        period: "Sep 2024 - May 2025",
        description: "Led the electrical systems redesign for competition robotics team. Managed power distribution, motor control circuits, and sensor integration for autonomous navigation systems.",
        tags: &["PCB Design", "Power Systems", "Team Leadership", "Arduino"],
        color: "from-orange-500 to-red-500",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Shown in place of `description` while the card is hovered
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
    pub features: &'static [&'static str],
    pub github: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Real-Time Embedded Systems Suite",
        description: "Interactive applications featuring graphics rendering, real-time control systems, and embedded game implementations. Demonstrates proficiency in low-level programming and hardware optimization.",
        long_description: "Built multiple interactive applications running on ARM Cortex-M4 microcontrollers. Implemented custom graphics libraries, real-time scheduling algorithms, and optimized memory management for resource-constrained environments.",
        tech: &["C/C++", "ARM Cortex-M4", "RTOS", "Graphics"],
        icon: "chip",
        color: "from-blue-500 to-indigo-500",
        features: &["Custom Graphics Engine", "Real-Time Scheduling", "Hardware Optimization"],
        github: None,
    },
    Project {
        title: "Blood Pressure Monitor",
        description: "Medical device with custom algorithms for accurate health monitoring. Features signal processing, user interface, and data logging capabilities.",
        long_description: "Developed a comprehensive blood pressure monitoring system with custom oscillometric algorithms. Implemented digital signal processing for noise reduction and accurate pulse detection.",
        tech: &["Arduino", "C++", "Signal Processing", "Sensors"],
        icon: "heart",
        color: "from-red-500 to-pink-500",
        features: &["Custom Algorithms", "Signal Processing", "LCD Display"],
        github: Some("https://github.com/jagmljk/Arduino-Blood-Pressure-Monitor"),
    },
    Project {
        title: "HokieHand Planner",
        description: "Full-stack web application helping Virginia Tech students plan their academic journey with intelligent course scheduling and degree progress tracking.",
        long_description: "Built a comprehensive academic planning platform with user authentication, course database integration, and intelligent scheduling algorithms that consider prerequisites and availability.",
        tech: &["React", "TypeScript", "MongoDB", "Node.js"],
        icon: "academic-cap",
        color: "from-orange-500 to-amber-500",
        features: &["Course Scheduling", "Degree Tracking", "User Dashboard"],
        github: None,
    },
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "AI & Machine Learning",
        icon: "eye",
        color: "from-purple-500 to-pink-500",
        skills: &[
            Skill { name: "PyTorch", icon: "pytorch" },
            Skill { name: "TensorFlow", icon: "tensorflow" },
            Skill { name: "Computer Vision", icon: "eye" },
            Skill { name: "Python", icon: "python" },
        ],
    },
    SkillCategory {
        title: "Embedded Systems",
        icon: "chip",
        color: "from-blue-500 to-cyan-500",
        skills: &[
            Skill { name: "ARM Cortex", icon: "chip" },
            Skill { name: "Arduino", icon: "arduino" },
            Skill { name: "STM32", icon: "cog" },
            Skill { name: "RTOS", icon: "server" },
        ],
    },
    SkillCategory {
        title: "Full-Stack Development",
        icon: "react",
        color: "from-green-500 to-emerald-500",
        skills: &[
            Skill { name: "React", icon: "react" },
            Skill { name: "TypeScript", icon: "typescript" },
            Skill { name: "Node.js", icon: "nodejs" },
            Skill { name: "MongoDB", icon: "mongodb" },
        ],
    },
    SkillCategory {
        title: "Languages & Tools",
        icon: "cplusplus",
        color: "from-orange-500 to-red-500",
        skills: &[
            Skill { name: "C/C++", icon: "cplusplus" },
            Skill { name: "C", icon: "c" },
            Skill { name: "Git", icon: "git" },
            Skill { name: "Docker", icon: "docker" },
        ],
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub hover_class: &'static str,
}

impl SocialLink {
    /// Everything except mail opens in a new browsing context
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Email",
        href: "mailto:jagan05@vt.edu",
        label: "jagan05@vt.edu",
        icon: "mail",
        hover_class: "hover:bg-red-500/10 hover:text-red-500 hover:border-red-500/30",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/jaganm05",
        label: "linkedin.com/in/jaganm05",
        icon: "linkedin",
        hover_class: "hover:bg-blue-500/10 hover:text-blue-500 hover:border-blue-500/30",
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/jaganm05",
        label: "github.com/jaganm05",
        icon: "github",
        hover_class: "hover:bg-neutral-500/10 hover:text-white hover:border-neutral-500/30",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_mail_stays_in_tab() {
        for link in SOCIAL_LINKS {
            assert_eq!(link.opens_new_tab(), link.name != "Email", "{}", link.name);
        }
    }

    #[test]
    fn test_titles_are_unique() {
        let experiences: HashSet<_> = EXPERIENCES.iter().map(|e| e.title).collect();
        assert_eq!(experiences.len(), EXPERIENCES.len());

        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(projects.len(), PROJECTS.len());

        let categories: HashSet<_> = SKILL_CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(categories.len(), SKILL_CATEGORIES.len());
    }

    #[test]
    fn test_project_links_are_absolute() {
        for project in PROJECTS {
            if let Some(url) = project.github {
                assert!(url.starts_with("https://github.com/"));
            }
        }
    }

    #[test]
    fn test_skill_grid_is_even() {
        // Rendered as a two-column grid
        for category in SKILL_CATEGORIES {
            assert_eq!(category.skills.len() % 2, 0, "{}", category.title);
        }
    }
}
