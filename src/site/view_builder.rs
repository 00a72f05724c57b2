//! View Builder - Converts portfolio content + UI state to view models
//!
//! Pure functions; the HTTP layer supplies the state and the current year.

use std::collections::HashSet;

use crate::navigation::{Direction, ScrollState, SectionRegistry};
use crate::portfolio::types::non_empty;
use crate::portfolio::{Portfolio, Project, ProjectCollection, ProjectEntry, SkillCategory, Socials};
use crate::site::icons::skill_icon;
use crate::site::markup::{asset_href, render_markdown};
use crate::site::state::ViewState;
use crate::site::view_models::*;

/// Build the complete home page for one page view
pub fn build_page(
    portfolio: &Portfolio,
    registry: &SectionRegistry,
    state: &ViewState,
    year: i32,
) -> PageView {
    PageView {
        meta: build_meta(portfolio),
        nav: build_nav(registry, &state.scroll),
        hero: HeroView {
            name: portfolio.name.clone(),
            title: portfolio.title.clone(),
        },
        projects: build_project_entries(&portfolio.projects, state.expanded()),
        skills: build_skills(&portfolio.skills),
        resume: ResumeView {
            href: asset_href(&portfolio.resume_url),
        },
        contact: build_contact_links(&portfolio.email, &portfolio.socials),
        footer: build_footer(portfolio, year),
    }
}

fn build_meta(portfolio: &Portfolio) -> MetaView {
    MetaView {
        title: portfolio.site.title.clone(),
        description: portfolio.site.description.clone(),
        keywords: portfolio.site.keywords.join(", "),
        author: portfolio.name.clone(),
    }
}

// ============================================================================
// Navigation
// ============================================================================

pub fn build_nav(registry: &SectionRegistry, scroll: &ScrollState) -> NavView {
    let items = registry
        .iter()
        .map(|section| {
            let is_active = scroll.is_active(&section.id);
            NavItemView {
                id: section.id.clone(),
                label: section.label.clone(),
                href: section.href(),
                is_active,
                underline_origin: underline_origin(is_active, scroll.direction),
            }
        })
        .collect();

    NavView {
        items,
        scrolled: scroll.has_scrolled,
    }
}

/// The incoming underline grows from the side we came from; the outgoing one
/// shrinks toward the side we're heading to.
fn underline_origin(is_active: bool, direction: Direction) -> &'static str {
    match (is_active, direction) {
        (true, Direction::Forward) | (false, Direction::Backward) => "left",
        (true, Direction::Backward) | (false, Direction::Forward) => "right",
    }
}

// ============================================================================
// Projects
// ============================================================================

pub fn build_project_entries(
    entries: &[ProjectEntry],
    expanded: &HashSet<String>,
) -> Vec<ProjectEntryView> {
    entries
        .iter()
        .map(|entry| match entry {
            ProjectEntry::Project(p) => ProjectEntryView::Single(build_card(p)),
            ProjectEntry::Collection(c) => {
                ProjectEntryView::Collection(build_collection(c, expanded.contains(&c.id)))
            }
        })
        .collect()
}

pub fn build_card(project: &Project) -> ProjectCardView {
    ProjectCardView {
        id: project.id.clone(),
        element_id: project.element_id(),
        title: project.title.clone(),
        description_html: render_markdown(&project.description),
        learnings_html: project.learnings().map(render_markdown),
        github_url: project.github_url.trim().to_string(),
        live_url: project.live_url().map(str::to_string),
        image_url: project.image().map(asset_href),
        tech_stack: project
            .tech_stack
            .iter()
            .filter_map(|t| non_empty(t))
            .map(str::to_string)
            .collect(),
    }
}

/// Sub-projects are only built when the collection is open.
pub fn build_collection(collection: &ProjectCollection, expanded: bool) -> CollectionView {
    let projects = if expanded {
        collection.projects.iter().map(build_card).collect()
    } else {
        Vec::new()
    };

    CollectionView {
        id: collection.id.clone(),
        element_id: collection.element_id().to_string(),
        panel_id: collection.panel_id(),
        title: collection.title.clone(),
        description: collection.description.clone(),
        icon_slug: collection.icon.slug(),
        count: collection.projects.len(),
        expanded,
        projects,
    }
}

// ============================================================================
// Skills
// ============================================================================

pub fn build_skills(categories: &[SkillCategory]) -> Vec<SkillCategoryView> {
    categories
        .iter()
        .map(|category| SkillCategoryView {
            name: category.category.clone(),
            skills: category
                .skills
                .iter()
                .filter_map(|s| non_empty(s))
                .map(|name| SkillChipView {
                    name: name.to_string(),
                    icon_slug: skill_icon(name),
                    initial: name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default(),
                })
                .collect(),
        })
        .collect()
}

// ============================================================================
// Contact / Footer
// ============================================================================

/// Contact section links: GitHub, LinkedIn, Email. Empty values are dropped.
pub fn build_contact_links(email: &str, socials: &Socials) -> Vec<LinkView> {
    [
        (LinkKind::GitHub, socials.github()),
        (LinkKind::LinkedIn, socials.linkedin()),
        (LinkKind::Email, non_empty(email)),
    ]
    .into_iter()
    .filter_map(|(kind, value)| value.map(|v| link(kind, v)))
    .collect()
}

/// Footer carries Twitter as well when one is configured.
pub fn build_footer(portfolio: &Portfolio, year: i32) -> FooterView {
    let socials = &portfolio.socials;
    let links = [
        (LinkKind::GitHub, socials.github()),
        (LinkKind::LinkedIn, socials.linkedin()),
        (LinkKind::Twitter, socials.twitter()),
        (LinkKind::Email, non_empty(&portfolio.email)),
    ]
    .into_iter()
    .filter_map(|(kind, value)| value.map(|v| link(kind, v)))
    .collect();

    FooterView {
        first_name: portfolio.first_name().to_string(),
        full_name: portfolio.name.clone(),
        year,
        links,
    }
}

fn link(kind: LinkKind, value: &str) -> LinkView {
    match kind {
        LinkKind::Email => LinkView {
            kind,
            href: format!("mailto:{}", value),
            external: false,
        },
        _ => LinkView {
            kind,
            href: value.to_string(),
            external: true,
        },
    }
}
