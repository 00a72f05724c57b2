//! Portfolio Site
//!
//! Server-rendered single-page portfolio with a scroll-spy navigation bar.
//!
//! - `navigation/`: section registry and the active-section resolver
//! - `portfolio/`: content model and loading/validation
//! - `site/`: per-view UI state, view models and templates
//! - `views`, `api_server`: page-view storage and the Axum HTTP surface
//!
//! The resolver and content model have no server dependencies; build with
//! `--no-default-features` to use them alone.

pub mod config;
pub mod navigation;
pub mod portfolio;
pub mod site;

#[cfg(feature = "server")]
pub mod views;

#[cfg(feature = "server")]
pub mod api_server;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use navigation::{resolve, Direction, ScrollSample, ScrollSpyConfig, ScrollState, SectionRegistry};
pub use portfolio::{Portfolio, PortfolioError};
pub use site::ViewState;

#[cfg(feature = "server")]
pub use api_server::{create_router, AppState};
