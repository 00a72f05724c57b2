//! Navigation Module
//!
//! Section registry and the scroll-spy resolver that decides which nav entry
//! is highlighted.

pub mod sections;
pub mod scroll_spy;

pub use sections::{RegistryError, Section, SectionRegistry, STANDARD_SECTIONS};
pub use scroll_spy::{resolve, Direction, ScrollSample, ScrollSpyConfig, ScrollState};
