//! Inline SVG icons (Feather set) and the skill-name icon lookup.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Twitter,
    Mail,
    ExternalLink,
    Folder,
    ChevronDown,
    Download,
    FileText,
    ArrowRight,
}

impl Icon {
    pub fn svg_path(&self) -> &'static str {
        match self {
            Icon::GitHub => r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>"#,
            Icon::LinkedIn => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#,
            Icon::Twitter => r#"<path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"/>"#,
            Icon::Mail => r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/>"#,
            Icon::ExternalLink => r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/>"#,
            Icon::Folder => r#"<path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"/>"#,
            Icon::ChevronDown => r#"<polyline points="6 9 12 15 18 9"/>"#,
            Icon::Download => r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" y1="15" x2="12" y2="3"/>"#,
            Icon::FileText => r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><line x1="16" y1="13" x2="8" y2="13"/><line x1="16" y1="17" x2="8" y2="17"/><polyline points="10 9 9 9 8 9"/>"#,
            Icon::ArrowRight => r#"<line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/>"#,
        }
    }

    /// Complete `<svg>` element at the given pixel size
    pub fn svg(&self, size: u32) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.svg_path()
        )
    }
}

/// Skills with a dedicated icon, keyed by lowercase name -> CSS icon slug
const SKILL_ICONS: &[(&str, &str)] = &[
    ("java", "java"),
    ("python", "python"),
    ("php", "php"),
    ("docker", "docker"),
    ("postgresql", "postgresql"),
    ("mysql", "mysql"),
    ("git", "git"),
    ("redis", "redis"),
    ("laravel", "laravel"),
    ("elasticsearch", "elasticsearch"),
    ("selenium", "selenium"),
    ("celery", "celery"),
    ("ollama", "cube"),
    ("spigot api", "api"),
];

/// Case-insensitive icon lookup; `None` means render the initial letter instead.
pub fn skill_icon(skill: &str) -> Option<&'static str> {
    let key = skill.trim().to_lowercase();
    SKILL_ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, slug)| *slug)
}
