//! Scroll Spy
//!
//! Tracks which section currently occupies the top of the viewport and which
//! way the reader is travelling through the registry.
//!
//! The whole thing is one pure transition, [`resolve`]: the previous state and
//! a fresh position sample go in, the next state comes out. Callers own the
//! state and decide when to sample.

use std::collections::HashMap;

use serde::Serialize;

use super::sections::SectionRegistry;

/// Form field carrying the window's vertical scroll offset.
pub const SCROLL_Y_FIELD: &str = "scroll_y";

/// Prefix of the per-section form fields, e.g. `top_projects=-320.5`.
pub const TOP_FIELD_PREFIX: &str = "top_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    /// Toward later sections (scrolling down the page)
    #[default]
    Forward,
    /// Toward earlier sections (scrolling up)
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpyConfig {
    /// A section becomes active once its top is at or above this many pixels
    /// from the viewport top. Roughly the nav bar height.
    pub activation_offset: f64,
    /// Page offset past which the nav bar switches to its solid background.
    pub scrolled_threshold: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            activation_offset: 150.0,
            scrolled_threshold: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollState {
    pub has_scrolled: bool,
    pub active: String,
    pub direction: Direction,
}

impl ScrollState {
    /// First section active, heading forward, page at rest.
    pub fn initial(registry: &SectionRegistry) -> Self {
        Self {
            has_scrolled: false,
            active: registry.first().id.clone(),
            direction: Direction::Forward,
        }
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active == section_id
    }
}

/// One reading of the layout: window offset plus the distance from the
/// viewport top to each section element that could be measured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    tops: HashMap<String, f64>,
}

impl ScrollSample {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            tops: HashMap::new(),
        }
    }

    pub fn with_top(mut self, section_id: impl Into<String>, top: f64) -> Self {
        self.record_top(section_id, top);
        self
    }

    /// Non-finite readings are dropped, same as an element that wasn't found.
    pub fn record_top(&mut self, section_id: impl Into<String>, top: f64) {
        if top.is_finite() {
            self.tops.insert(section_id.into(), top);
        }
    }

    pub fn top(&self, section_id: &str) -> Option<f64> {
        self.tops.get(section_id).copied()
    }

    /// Build a sample from posted form fields (`scroll_y`, `top_<id>`).
    ///
    /// Anything unparseable is ignored; a missing `scroll_y` reads as 0.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut sample = Self::default();
        for (key, value) in fields {
            let Ok(parsed) = value.trim().parse::<f64>() else {
                continue;
            };
            if key == SCROLL_Y_FIELD {
                if parsed.is_finite() {
                    sample.scroll_y = parsed;
                }
            } else if let Some(section_id) = key.strip_prefix(TOP_FIELD_PREFIX) {
                if !section_id.is_empty() {
                    sample.record_top(section_id, parsed);
                }
            }
        }
        sample
    }
}

/// Compute the next scroll state.
///
/// Walks the registry from the last section backwards and picks the first one
/// whose top has crossed `activation_offset`: the last section in display
/// order that has scrolled under the nav bar. If nothing qualifies the
/// previous section (and direction) stand. Ties go to the later section.
pub fn resolve(
    previous: &ScrollState,
    sample: &ScrollSample,
    registry: &SectionRegistry,
    config: &ScrollSpyConfig,
) -> ScrollState {
    let has_scrolled = sample.scroll_y > config.scrolled_threshold;

    let resolved = registry
        .iter()
        .enumerate()
        .rev()
        .find(|(_, section)| {
            sample
                .top(&section.id)
                .is_some_and(|top| top <= config.activation_offset)
        });

    match resolved {
        Some((new_index, section)) if section.id != previous.active => {
            let direction = match registry.index_of(&previous.active) {
                Some(old_index) if new_index < old_index => Direction::Backward,
                _ => Direction::Forward,
            };
            ScrollState {
                has_scrolled,
                active: section.id.clone(),
                direction,
            }
        }
        _ => ScrollState {
            has_scrolled,
            active: previous.active.clone(),
            direction: previous.direction,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::sections::Section;

    /// Document offsets of each standard section in a synthetic 3600px page
    const LAYOUT: &[(&str, f64)] = &[
        ("hero", 0.0),
        ("projects", 900.0),
        ("skills", 1800.0),
        ("resume", 2400.0),
        ("contact", 3000.0),
    ];

    fn sample_at(scroll_y: f64) -> ScrollSample {
        LAYOUT
            .iter()
            .fold(ScrollSample::new(scroll_y), |sample, (id, offset)| {
                sample.with_top(*id, offset - scroll_y)
            })
    }

    fn state(active: &str, direction: Direction) -> ScrollState {
        ScrollState {
            has_scrolled: true,
            active: active.to_string(),
            direction,
        }
    }

    #[test]
    fn test_initial_state() {
        let registry = SectionRegistry::standard();
        let initial = ScrollState::initial(&registry);
        assert_eq!(initial.active, "hero");
        assert_eq!(initial.direction, Direction::Forward);
        assert!(!initial.has_scrolled);
    }

    #[test]
    fn test_single_section_past_offset_becomes_active() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let sample = ScrollSample::new(1700.0)
            .with_top("hero", 400.0)
            .with_top("projects", 500.0)
            .with_top("skills", 100.0)
            .with_top("resume", 700.0)
            .with_top("contact", 1300.0);

        let next = resolve(&ScrollState::initial(&registry), &sample, &registry, &config);
        assert_eq!(next.active, "skills");
        assert_eq!(next.direction, Direction::Forward);
    }

    #[test]
    fn test_later_section_wins_when_several_qualify() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let next = resolve(&ScrollState::initial(&registry), &sample_at(2000.0), &registry, &config);
        // hero, projects and skills are all above the offset
        assert_eq!(next.active, "skills");
    }

    #[test]
    fn test_nothing_qualifies_keeps_previous() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let previous = state("resume", Direction::Backward);
        let sample = ScrollSample::new(10.0)
            .with_top("hero", 200.0)
            .with_top("projects", 1100.0)
            .with_top("skills", 2000.0);

        let next = resolve(&previous, &sample, &registry, &config);
        assert_eq!(next.active, "resume");
        assert_eq!(next.direction, Direction::Backward);
        assert!(!next.has_scrolled);
    }

    #[test]
    fn test_empty_sample_keeps_previous() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let previous = state("projects", Direction::Forward);
        let next = resolve(&previous, &ScrollSample::new(900.0), &registry, &config);
        assert_eq!(next.active, "projects");
        assert!(next.has_scrolled);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        // contact would win, but its element isn't in the document
        let sample = ScrollSample::new(3200.0)
            .with_top("hero", -3200.0)
            .with_top("resume", -800.0);

        let next = resolve(&ScrollState::initial(&registry), &sample, &registry, &config);
        assert_eq!(next.active, "resume");
    }

    #[test]
    fn test_unknown_sample_keys_are_ignored() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let sample = ScrollSample::new(500.0).with_top("newsletter", -20.0);
        let next = resolve(&ScrollState::initial(&registry), &sample, &registry, &config);
        assert_eq!(next.active, "hero");
    }

    #[test]
    fn test_tie_resolves_to_later_section() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        // Zero-height resume section: resume and contact share a top
        let sample = ScrollSample::new(2950.0)
            .with_top("skills", -1150.0)
            .with_top("resume", 50.0)
            .with_top("contact", 50.0);

        let next = resolve(&state("skills", Direction::Forward), &sample, &registry, &config);
        assert_eq!(next.active, "contact");
    }

    #[test]
    fn test_offset_boundary_is_inclusive() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let at = ScrollSample::new(750.0).with_top("projects", 150.0);
        let below = ScrollSample::new(749.0).with_top("projects", 151.0);

        let initial = ScrollState::initial(&registry);
        assert_eq!(resolve(&initial, &at, &registry, &config).active, "projects");
        assert_eq!(resolve(&initial, &below, &registry, &config).active, "hero");
    }

    #[test]
    fn test_scrolled_flag_is_independent_of_section() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let initial = ScrollState::initial(&registry);

        assert!(!resolve(&initial, &sample_at(50.0), &registry, &config).has_scrolled);
        let next = resolve(&initial, &sample_at(51.0), &registry, &config);
        assert!(next.has_scrolled);
        assert_eq!(next.active, "hero");
    }

    #[test]
    fn test_direction_backward_on_jump_up() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let next = resolve(&state("contact", Direction::Forward), &sample_at(950.0), &registry, &config);
        assert_eq!(next.active, "projects");
        assert_eq!(next.direction, Direction::Backward);
    }

    #[test]
    fn test_configurable_activation_offset() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig {
            activation_offset: 0.0,
            scrolled_threshold: 50.0,
        };
        // projects top is 100px down: active with the default offset, not with 0
        let next = resolve(&ScrollState::initial(&registry), &sample_at(800.0), &registry, &config);
        assert_eq!(next.active, "hero");
    }

    #[test]
    fn test_monotonic_scroll_visits_sections_in_order() {
        let registry = SectionRegistry::standard();
        let config = ScrollSpyConfig::default();
        let mut current = ScrollState::initial(&registry);
        let mut visited = vec![current.active.clone()];

        for step in 0..=360 {
            let next = resolve(&current, &sample_at(step as f64 * 10.0), &registry, &config);
            assert!(registry.contains(&next.active));
            if next.active != current.active {
                assert_eq!(next.direction, Direction::Forward);
                visited.push(next.active.clone());
            }
            current = next;
        }
        assert_eq!(visited, vec!["hero", "projects", "skills", "resume", "contact"]);

        let mut visited_up = vec![current.active.clone()];
        for step in (0..=360).rev() {
            let next = resolve(&current, &sample_at(step as f64 * 10.0), &registry, &config);
            assert!(registry.contains(&next.active));
            if next.active != current.active {
                assert_eq!(next.direction, Direction::Backward);
                visited_up.push(next.active.clone());
            }
            current = next;
        }
        assert_eq!(visited_up, vec!["contact", "resume", "skills", "projects", "hero"]);
    }

    #[test]
    fn test_active_always_in_custom_registry() {
        let registry = SectionRegistry::new(vec![
            Section::new("intro", "Intro"),
            Section::new("work", "Work"),
        ])
        .unwrap();
        let config = ScrollSpyConfig::default();
        let mut current = ScrollState::initial(&registry);

        for scroll_y in [-200.0, 0.0, 300.0, 1200.0, 40.0, 5000.0] {
            let sample = ScrollSample::new(scroll_y)
                .with_top("intro", -scroll_y)
                .with_top("work", 1000.0 - scroll_y)
                .with_top("hero", -scroll_y);
            current = resolve(&current, &sample, &registry, &config);
            assert!(registry.contains(&current.active), "{} escaped the registry", current.active);
        }
    }

    #[test]
    fn test_sample_from_fields() {
        let fields = vec![
            ("scroll_y", "812.5"),
            ("top_hero", "-812.5"),
            ("top_projects", " 87.5 "),
            ("top_skills", "NaN"),
            ("top_resume", "not-a-number"),
            ("top_", "12"),
            ("unrelated", "3"),
        ];
        let sample = ScrollSample::from_fields(fields);

        assert_eq!(sample.scroll_y, 812.5);
        assert_eq!(sample.top("hero"), Some(-812.5));
        assert_eq!(sample.top("projects"), Some(87.5));
        assert_eq!(sample.top("skills"), None);
        assert_eq!(sample.top("resume"), None);
        assert_eq!(sample.top(""), None);
    }

    #[test]
    fn test_sample_from_fields_defaults_scroll_y() {
        let sample = ScrollSample::from_fields(vec![("top_hero", "0")]);
        assert_eq!(sample.scroll_y, 0.0);
        assert_eq!(sample.top("hero"), Some(0.0));
    }
}
