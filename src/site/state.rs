//! Page-view UI state
//!
//! Everything the page remembers between interactions: the scroll-spy state
//! and which collections are open. Lives only as long as the page view.

use std::collections::HashSet;

use crate::navigation::{resolve, ScrollSample, ScrollSpyConfig, ScrollState, SectionRegistry};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub scroll: ScrollState,
    expanded: HashSet<String>,
}

impl ViewState {
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            scroll: ScrollState::initial(registry),
            expanded: HashSet::new(),
        }
    }

    /// Apply a scroll sample; returns true when the nav needs re-rendering.
    pub fn apply_scroll(
        &mut self,
        sample: &ScrollSample,
        registry: &SectionRegistry,
        config: &ScrollSpyConfig,
    ) -> bool {
        let next = resolve(&self.scroll, sample, registry, config);
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    pub fn is_expanded(&self, collection_id: &str) -> bool {
        self.expanded.contains(collection_id)
    }

    /// Flip one collection open/closed; returns the new expanded flag.
    pub fn toggle_collection(&mut self, collection_id: &str) -> bool {
        if self.expanded.remove(collection_id) {
            false
        } else {
            self.expanded.insert(collection_id.to_string());
            true
        }
    }

    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }
}
