//! View Models for page rendering
//!
//! Render-ready data for the Askama templates. All decisions (what is
//! active, which links exist, what is expanded) are made in the view
//! builder; templates only print.

use serde::Serialize;

use crate::site::icons::Icon;

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub meta: MetaView,
    pub nav: NavView,
    pub hero: HeroView,
    pub projects: Vec<ProjectEntryView>,
    pub skills: Vec<SkillCategoryView>,
    pub resume: ResumeView,
    pub contact: Vec<LinkView>,
    pub footer: FooterView,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaView {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NavView {
    pub items: Vec<NavItemView>,
    pub scrolled: bool,
}

impl NavView {
    pub fn active_label(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.is_active)
            .map(|item| item.label.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemView {
    pub id: String,
    pub label: String,
    pub href: String,
    pub is_active: bool,
    /// Side the underline grows from ("left" / "right"), so it sweeps in
    /// the direction of travel
    pub underline_origin: &'static str,
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub name: String,
    pub title: String,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub enum ProjectEntryView {
    Single(ProjectCardView),
    Collection(CollectionView),
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardView {
    pub id: String,
    pub element_id: String,
    pub title: String,
    pub description_html: String,
    pub learnings_html: Option<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionView {
    pub id: String,
    pub element_id: String,
    pub panel_id: String,
    pub title: String,
    pub description: String,
    pub icon_slug: &'static str,
    pub count: usize,
    pub expanded: bool,
    pub projects: Vec<ProjectCardView>,
}

impl CollectionView {
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategoryView {
    pub name: String,
    pub skills: Vec<SkillChipView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillChipView {
    pub name: String,
    pub icon_slug: Option<&'static str>,
    /// Fallback badge letter when there is no icon
    pub initial: String,
}

// ============================================================================
// Resume / Contact / Footer
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ResumeView {
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
}

impl LinkKind {
    pub fn slug(&self) -> &'static str {
        match self {
            LinkKind::GitHub => "github",
            LinkKind::LinkedIn => "linkedin",
            LinkKind::Twitter => "twitter",
            LinkKind::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::GitHub => "GitHub",
            LinkKind::LinkedIn => "LinkedIn",
            LinkKind::Twitter => "Twitter",
            LinkKind::Email => "Email",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            LinkKind::GitHub => Icon::GitHub,
            LinkKind::LinkedIn => Icon::LinkedIn,
            LinkKind::Twitter => Icon::Twitter,
            LinkKind::Email => Icon::Mail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub kind: LinkKind,
    pub href: String,
    /// Opens in a new tab (everything except mailto)
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub first_name: String,
    pub full_name: String,
    pub year: i32,
    pub links: Vec<LinkView>,
}
