// Page and fragment templates rendered with Askama

use askama::Template;

use crate::site::icons::Icon;
use crate::site::view_models::{
    CollectionView, FooterView, HeroView, LinkView, MetaView, NavView, PageView, ProjectEntryView,
    ResumeView, SkillCategoryView,
};

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub view_id: String,
    pub meta: MetaView,
    pub nav: NavView,
    pub hero: HeroView,
    pub projects: Vec<ProjectEntryView>,
    pub skills: Vec<SkillCategoryView>,
    pub resume: ResumeView,
    pub contact: Vec<LinkView>,
    pub footer: FooterView,
    pub icons: IconSet,
}

impl HomeTemplate {
    pub fn new(view_id: impl Into<String>, page: PageView) -> Self {
        let PageView {
            meta,
            nav,
            hero,
            projects,
            skills,
            resume,
            contact,
            footer,
        } = page;

        Self {
            view_id: view_id.into(),
            meta,
            nav,
            hero,
            projects,
            skills,
            resume,
            contact,
            footer,
            icons: IconSet,
        }
    }
}

// ============================================================================
// htmx fragments
// ============================================================================

#[derive(Template)]
#[template(path = "fragments/nav.html")]
pub struct NavTemplate {
    pub view_id: String,
    pub nav: NavView,
}

#[derive(Template)]
#[template(path = "fragments/collection.html")]
pub struct CollectionTemplate {
    pub view_id: String,
    pub collection: CollectionView,
    pub icons: IconSet,
}

/// Fixed icons referenced directly by templates
#[derive(Debug, Clone, Copy, Default)]
pub struct IconSet;

impl IconSet {
    pub fn github(&self) -> String {
        Icon::GitHub.svg(18)
    }

    pub fn external_link(&self) -> String {
        Icon::ExternalLink.svg(18)
    }

    pub fn folder(&self) -> String {
        Icon::Folder.svg(18)
    }

    pub fn chevron(&self) -> String {
        Icon::ChevronDown.svg(16)
    }

    pub fn download(&self) -> String {
        Icon::Download.svg(16)
    }

    pub fn file_text(&self) -> String {
        Icon::FileText.svg(40)
    }

    pub fn arrow_right(&self) -> String {
        Icon::ArrowRight.svg(16)
    }
}
