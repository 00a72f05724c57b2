//! Site rendering
//!
//! - `state`: per-page-view UI state (scroll-spy + expanded collections)
//! - `view_builder`: portfolio + state -> view models
//! - `pages`: Askama templates for the full page and htmx fragments

pub mod icons;
pub mod markup;
pub mod state;
pub mod view_builder;
pub mod view_models;

#[cfg(feature = "server")]
pub mod pages;

pub use state::ViewState;
pub use view_builder::{build_collection, build_nav, build_page};
pub use view_models::PageView;
