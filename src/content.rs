//! Static page content: section anchors, navigation, skills, certifications and
//! projects. Everything here is fixed at build time.

use std::fmt;

/// Scrollable page regions. The anchor doubles as the DOM `id` and the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Accepts either a bare anchor (`contact`) or a fragment (`#contact`).
    pub fn from_anchor(value: &str) -> Option<Self> {
        let value = value.strip_prefix('#').unwrap_or(value);
        Self::ALL.into_iter().find(|s| s.anchor() == value)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "About",
        target: SectionId::About,
    },
    NavItem {
        label: "Skills",
        target: SectionId::Skills,
    },
    NavItem {
        label: "Projects",
        target: SectionId::Projects,
    },
    NavItem {
        label: "Contact",
        target: SectionId::Contact,
    },
];

pub const HIRE_ME: NavItem = NavItem {
    label: "Hire Me",
    target: SectionId::Contact,
};

pub mod profile {
    pub const NAME: &str = "Testimony Owolabi";
    pub const HANDLE: &str = "buzzdotsui";
    pub const EMAIL: &str = "owolabitestimony7724@gmail.com";
    pub const AVATAR_URL: &str = "https://github.com/buzzdotsui.png";
    pub const GITHUB_URL: &str = "https://github.com/buzzdotsui";
    pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/testimony-owolabi/";
    pub const X_URL: &str = "https://x.com/_buzzdotsui";
}

/// Icons shared by skill chips, categories, certifications and feature cards.
/// Rendered by the presentation layer; the content model only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Atom,
    Box,
    Code,
    Database,
    FileCode,
    GitBranch,
    Globe,
    Hash,
    Heart,
    Layers,
    Layout,
    Palette,
    Server,
    Shield,
    ShieldAlert,
    Terminal,
    Zap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Ethical Hacking",
        icon: Icon::Shield,
        skills: &[
            "Kali Linux",
            "Penetration Testing",
            "Python Scripting",
            "Metasploit",
            "Wireshark",
            "Vulnerability Analysis",
            "Network Security",
        ],
    },
    SkillCategory {
        title: "Smart Contracts",
        icon: Icon::Hash,
        skills: &[
            "Sui Move",
            "Rust",
            "Solidity",
            "Smart Contract Security",
            "Blockchain Development",
            "DApp Integration",
            "DeFi Protocols",
        ],
    },
    SkillCategory {
        title: "Frontend Engineering",
        icon: Icon::Layout,
        skills: &[
            "React 18+",
            "Next.js 14",
            "Tailwind CSS",
            "Framer Motion",
            "TypeScript",
            "UI/UX Design",
        ],
    },
    SkillCategory {
        title: "Backend & Systems",
        icon: Icon::Database,
        skills: &[
            "Node.js",
            "Express",
            "PostgreSQL",
            "MongoDB",
            "Linux Systems",
            "Docker",
        ],
    },
];

// Checked top to bottom; the first keyword hit wins.
const SKILL_ICON_RULES: &[(&[&str], Icon)] = &[
    (&["react", "next", "web"], Icon::Atom),
    (&["css", "tailwind", "design", "ui/ux"], Icon::Palette),
    (&["node", "express"], Icon::Server),
    (&["python", "scripting"], Icon::FileCode),
    (&["database", "sql", "mongo"], Icon::Database),
    (&["linux", "bash", "shell"], Icon::Terminal),
    (
        &["security", "hacking", "penetration", "vulnerability"],
        Icon::Shield,
    ),
    (&["docker", "cloud"], Icon::Box),
    (&["git"], Icon::GitBranch),
    (&["network", "wireshark"], Icon::Globe),
    (&["rust", "solidity", "move", "chain"], Icon::Hash),
];

pub fn skill_icon(skill: &str) -> Icon {
    let lower = skill.to_lowercase();
    SKILL_ICON_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(Icon::Code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo {
    Image(&'static str),
    Icon(Icon),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub full_name: Option<&'static str>,
    pub issuer: &'static str,
    /// Tailwind text colour class for icon logos
    pub color_class: &'static str,
    /// Hex colour used for the hover glow
    pub glow_color: &'static str,
    pub logo: Logo,
}

impl Certification {
    pub fn display_name(&self) -> &'static str {
        self.full_name.unwrap_or(self.name)
    }
}

pub const CERTIFICATIONS: [Certification; 6] = [
    Certification {
        name: "CCNA",
        full_name: Some("Cisco Certified Network Associate"),
        issuer: "Cisco",
        color_class: "text-blue-400",
        glow_color: "#00bceb",
        logo: Logo::Image("https://cdn.simpleicons.org/cisco/00bceb"),
    },
    Certification {
        name: "CCNP",
        full_name: Some("Cisco Certified Network Professional"),
        issuer: "Cisco",
        color_class: "text-blue-500",
        glow_color: "#005073",
        logo: Logo::Image("https://cdn.simpleicons.org/cisco/005073"),
    },
    Certification {
        name: "CEH",
        full_name: Some("Certified Ethical Hacker"),
        issuer: "EC-Council",
        color_class: "text-green-500",
        glow_color: "#22c55e",
        logo: Logo::Icon(Icon::ShieldAlert),
    },
    Certification {
        name: "Security+",
        full_name: Some("CompTIA Security+"),
        issuer: "CompTIA",
        color_class: "text-red-500",
        glow_color: "#FF0000",
        logo: Logo::Image("https://cdn.simpleicons.org/comptia/FF0000"),
    },
    Certification {
        name: "OSCP",
        full_name: Some("Offensive Security Certified Professional"),
        issuer: "OffSec",
        color_class: "text-orange-500",
        glow_color: "#f97316",
        logo: Logo::Image("https://avatars.githubusercontent.com/u/1724220?v=4"),
    },
    Certification {
        name: "eCPPT",
        full_name: Some("Certified Penetration Tester"),
        issuer: "eLearnSecurity",
        color_class: "text-cyan-500",
        glow_color: "#06b6d4",
        logo: Logo::Icon(Icon::Globe),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent_class: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Layers,
        title: "Clean Architecture",
        description:
            "I believe in maintainable, modular code that scales with your business needs.",
        accent_class: "text-primary",
    },
    Feature {
        icon: Icon::Zap,
        title: "Performance First",
        description:
            "Optimizing for Core Web Vitals and lightning-fast load times is my standard.",
        accent_class: "text-accent",
    },
    Feature {
        icon: Icon::Heart,
        title: "Thoughtful UX",
        description:
            "Accessibility and user experience drive every architectural decision I make.",
        accent_class: "text-pink-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub github_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: "testytech",
        title: "TestyTech",
        description: "A premium digital agency platform showcasing cutting-edge web solutions. Built with modern React architecture, featuring smooth scroll animations, interactive service showcases, and a focus on high-conversion design.",
        tags: &["React", "Tailwind CSS", "UI/UX", "Netlify"],
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=800&auto=format&fit=crop",
        github_url: None,
        demo_url: Some("https://testytech.netlify.app/"),
        featured: true,
    },
    Project {
        id: "smartstudy",
        title: "SmartStudy Africa",
        description: "A comprehensive e-learning platform dedicated to empowering African students. Features intuitive course navigation, resource libraries, and a responsive design accessible across devices.",
        tags: &["React", "Education Tech", "Platform", "Responsive"],
        image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=800&auto=format&fit=crop",
        github_url: None,
        demo_url: Some("https://smartstudy-africa.netlify.app/"),
        featured: true,
    },
    Project {
        id: "neon-guard",
        title: "Neon GUARD",
        description: "A futuristic, offline-capable security dashboard featuring real-time simulated metrics, virtualized data grids, and an interactive CLI.",
        tags: &[
            "React",
            "TypeScript",
            "Tailwind",
            "Storybook",
            "Real-Time",
            "Data-Visualization",
        ],
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=800&auto=format&fit=crop",
        github_url: Some("https://github.com/buzzdotsui"),
        demo_url: Some("https://neonguard.netlify.app"),
        featured: true,
    },
    Project {
        id: "nmap-scanner",
        title: "Automated Nmap Scanner",
        description: "A Python script that automates basic network reconnaissance using Nmap, providing quick reports on open ports and services for security auditing.",
        tags: &["Python", "Nmap", "Network Security", "Automation"],
        image_url: "https://images.unsplash.com/photo-1629654297299-c8506221ca97?q=80&w=800&auto=format&fit=crop",
        github_url: Some("https://github.com/buzzdotsui"),
        demo_url: None,
        featured: false,
    },
    Project {
        id: "sentinel",
        title: "Project Sentinel",
        description: "A proof-of-concept log monitoring and anomaly detection system utilizing machine learning to identify suspicious activities in real-time.",
        tags: &["Machine Learning", "Python", "Cybersecurity", "Log Analysis"],
        image_url: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=800&auto=format&fit=crop",
        github_url: Some("https://github.com/buzzdotsui"),
        demo_url: None,
        featured: false,
    },
    Project {
        id: "crypto-sentinel",
        title: "CryptoSentinel",
        description: "Real-time cryptocurrency tracking dashboard with predictive analytics. Integrated with multiple exchange APIs for live data visualization.",
        tags: &["Next.js", "D3.js", "WebSockets", "Node.js"],
        image_url: "https://images.unsplash.com/photo-1621761191319-c6fb62004040?q=80&w=800&auto=format&fit=crop",
        github_url: Some("https://github.com/buzzdotsui"),
        demo_url: Some("#"),
        featured: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Outline,
    Glow,
}

impl BadgeVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-surfaceHighlight text-text-main border border-border",
            Self::Outline => "bg-transparent text-text-muted border border-border",
            Self::Glow => {
                "bg-primary/10 text-primary border border-primary/20 shadow-[0_0_10px_rgba(59,130,246,0.2)]"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchor_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
            assert_eq!(SectionId::from_anchor(&section.href()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("#nowhere"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }

    #[test]
    fn test_anchors_are_unique() {
        let anchors = SectionId::ALL
            .iter()
            .map(|s| s.anchor())
            .collect::<HashSet<_>>();
        assert_eq!(anchors.len(), SectionId::ALL.len());
        assert_eq!(SectionId::Contact.to_string(), "contact");
    }

    #[test]
    fn test_nav_items_skip_hero() {
        assert!(NAV_ITEMS.iter().all(|item| item.target != SectionId::Hero));
        assert_eq!(HIRE_ME.target, SectionId::Contact);
    }

    #[test]
    fn test_skill_icon_priority() {
        assert_eq!(skill_icon("React 18+"), Icon::Atom);
        // "Next.js" matches before the css rule would ever be checked
        assert_eq!(skill_icon("Next.js 14"), Icon::Atom);
        assert_eq!(skill_icon("Tailwind CSS"), Icon::Palette);
        assert_eq!(skill_icon("UI/UX Design"), Icon::Palette);
        assert_eq!(skill_icon("Node.js"), Icon::Server);
        assert_eq!(skill_icon("Python Scripting"), Icon::FileCode);
        assert_eq!(skill_icon("PostgreSQL"), Icon::Database);
        assert_eq!(skill_icon("Kali Linux"), Icon::Terminal);
        // "Linux Systems" hits linux before anything else
        assert_eq!(skill_icon("Linux Systems"), Icon::Terminal);
        assert_eq!(skill_icon("Penetration Testing"), Icon::Shield);
        assert_eq!(skill_icon("Smart Contract Security"), Icon::Shield);
        assert_eq!(skill_icon("Docker"), Icon::Box);
        assert_eq!(skill_icon("Wireshark"), Icon::Globe);
        assert_eq!(skill_icon("Sui Move"), Icon::Hash);
        assert_eq!(skill_icon("Blockchain Development"), Icon::Hash);
        assert_eq!(skill_icon("Metasploit"), Icon::Code);
        assert_eq!(skill_icon("TypeScript"), Icon::Code);
    }

    #[test]
    fn test_certification_display_name() {
        let ceh = CERTIFICATIONS
            .iter()
            .find(|c| c.name == "CEH")
            .expect("CEH should be listed");
        assert_eq!(ceh.display_name(), "Certified Ethical Hacker");

        let bare = Certification {
            full_name: None,
            ..*ceh
        };
        assert_eq!(bare.display_name(), "CEH");
    }

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
        assert!(PROJECTS
            .iter()
            .all(|p| p.github_url.is_some() || p.demo_url.is_some()));
    }
}
