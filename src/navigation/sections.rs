//! Section Registry
//!
//! Fixed, ordered list of the page's anchorable sections. Order drives both
//! the nav bar layout and the forward/backward notion used by the scroll spy.

use serde::Serialize;
use thiserror::Error;

/// Sections rendered by the home page, in display order: (anchor id, nav label)
pub const STANDARD_SECTIONS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("resume", "Resume"),
    ("contact", "Contact"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// In-page anchor, e.g. "#projects"
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry must contain at least one section")]
    Empty,
    #[error("section at position {0} has a blank identifier")]
    BlankId(usize),
    #[error("duplicate section identifier '{0}'")]
    Duplicate(String),
}

/// Non-empty, duplicate-free ordered list of sections.
///
/// Every identifier a [`ScrollState`](super::ScrollState) can hold comes from
/// here, so construction is the only place the invariant needs checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (idx, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(RegistryError::BlankId(idx));
            }
            if sections[..idx].iter().any(|s| s.id == section.id) {
                return Err(RegistryError::Duplicate(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// Registry for the portfolio home page.
    pub fn standard() -> Self {
        Self {
            sections: STANDARD_SECTIONS
                .iter()
                .map(|(id, label)| Section::new(*id, *label))
                .collect(),
        }
    }

    pub fn first(&self) -> &Section {
        // Non-empty by construction
        &self.sections[0]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
