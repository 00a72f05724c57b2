//! Portfolio Content
//!
//! The static data object every section renders from: identity, socials,
//! resume link, skills taxonomy and the project gallery.

pub mod types;
pub mod loader;

pub use types::{
    CollectionIcon, Portfolio, Project, ProjectCollection, ProjectEntry, SiteMeta, SkillCategory,
    Socials,
};
pub use loader::{PortfolioError, EMBEDDED_PORTFOLIO};
