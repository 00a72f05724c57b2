//! Portfolio loading and validation
//!
//! Content is read once at startup, either from the copy compiled into the
//! binary or from a JSON file supplied at deploy time.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{non_empty, Portfolio, Project, ProjectEntry};
use crate::navigation::STANDARD_SECTIONS;

/// Default portfolio shipped with the binary
pub const EMBEDDED_PORTFOLIO: &str = include_str!("../../data/portfolio.json");

/// Element ids the nav bar renders, alongside the section anchors
pub const NAV_ELEMENT_IDS: &[&str] = &["site-nav", "nav-toggle"];

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read portfolio file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed portfolio JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid portfolio content: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        let json = std::fs::read_to_string(path).map_err(|source| PortfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn embedded() -> Result<Self, PortfolioError> {
        Self::from_json(EMBEDDED_PORTFOLIO)
    }

    /// File at `path` when given, embedded copy otherwise.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, PortfolioError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::embedded(),
        }
    }

    /// Collect every content problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        let mut problems = Vec::new();

        if non_empty(&self.name).is_none() {
            problems.push("name is empty".to_string());
        }
        if non_empty(&self.email).is_none() {
            problems.push("email is empty".to_string());
        }

        for (idx, category) in self.skills.iter().enumerate() {
            if non_empty(&category.category).is_none() {
                problems.push(format!("skill category #{} has no name", idx + 1));
            }
        }

        for entry in &self.projects {
            match entry {
                ProjectEntry::Project(p) => check_project(p, &mut problems),
                ProjectEntry::Collection(c) => {
                    if non_empty(&c.title).is_none() {
                        problems.push(format!("collection '{}' has no title", c.id));
                    }
                    for p in &c.projects {
                        check_project(p, &mut problems);
                    }
                }
            }
        }

        // Collection toggles are keyed by id, so ids must be unique page-wide
        let mut seen = HashSet::new();
        for id in self.all_ids() {
            if non_empty(id).is_none() {
                problems.push("project entry with empty id".to_string());
            } else if !seen.insert(id) {
                problems.push(format!("duplicate project id '{}'", id));
            }
        }

        check_element_ids(self, &mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(PortfolioError::Invalid(problems))
        }
    }
}

/// Every rendered DOM id must be unique, or nav anchors and toggle
/// redirects land on the wrong element. Exact duplicate entry ids are
/// already reported above and are not repeated here.
fn check_element_ids(portfolio: &Portfolio, problems: &mut Vec<String>) {
    // element id -> owning entry id (None for the page itself)
    let mut owners: HashMap<String, Option<&str>> = STANDARD_SECTIONS
        .iter()
        .map(|(id, _)| *id)
        .chain(NAV_ELEMENT_IDS.iter().copied())
        .map(|id| (id.to_string(), None))
        .collect();

    let mut rendered: Vec<(&str, String)> = Vec::new();
    for entry in &portfolio.projects {
        match entry {
            ProjectEntry::Project(p) => rendered.push((p.id.as_str(), p.element_id())),
            ProjectEntry::Collection(c) => {
                rendered.push((c.id.as_str(), c.element_id().to_string()));
                rendered.push((c.id.as_str(), c.panel_id()));
                rendered.extend(c.projects.iter().map(|p| (p.id.as_str(), p.element_id())));
            }
        }
    }

    for (entry_id, element_id) in rendered {
        if non_empty(entry_id).is_none() {
            continue;
        }
        match owners.get(element_id.as_str()).copied() {
            None => {
                owners.insert(element_id, Some(entry_id));
            }
            Some(None) => problems.push(format!(
                "'{}' renders element id '{}', which the page already uses",
                entry_id, element_id
            )),
            Some(Some(owner)) if owner == entry_id => {}
            Some(Some(owner)) => problems.push(format!(
                "'{}' renders element id '{}', already rendered by '{}'",
                entry_id, element_id, owner
            )),
        }
    }
}

fn check_project(project: &Project, problems: &mut Vec<String>) {
    if non_empty(&project.title).is_none() {
        problems.push(format!("project '{}' has no title", project.id));
    }
    if non_empty(&project.github_url).is_none() {
        problems.push(format!("project '{}' has no repository link", project.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::types::CollectionIcon;

    const MINIMAL: &str = r#"{
        "name": "Ada Lovelace",
        "title": "Analyst",
        "email": "ada@example.com",
        "projects": [
            {
                "type": "project",
                "id": "engine",
                "title": "Analytical Engine",
                "description": "Notes on the engine.",
                "github_url": "https://github.com/ada/engine"
            },
            {
                "type": "collection",
                "id": "notes",
                "title": "Notes",
                "description": "Annotated translations",
                "projects": [
                    {
                        "id": "note-g",
                        "title": "Note G",
                        "description": "Bernoulli numbers.",
                        "github_url": "https://github.com/ada/note-g",
                        "live_url": "https://example.com/note-g"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = Portfolio::embedded().expect("embedded portfolio should be valid");
        assert_eq!(portfolio.first_name(), "Lóránt");
        assert_eq!(portfolio.skills.len(), 4);
        assert_eq!(portfolio.skills[0].category, "Languages");
        assert!(portfolio.socials.twitter().is_none());
        assert!(portfolio.collection("minecraft-plugins").is_some());
    }

    #[test]
    fn test_minimal_portfolio_defaults() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        assert_eq!(portfolio.resume_url, "/assets/resume.pdf");
        assert!(portfolio.skills.is_empty());
        assert_eq!(portfolio.site.title, "Portfolio | Developer");

        let collection = portfolio.collection("notes").unwrap();
        assert_eq!(collection.icon, CollectionIcon::Default);
        assert_eq!(collection.projects[0].live_url(), Some("https://example.com/note-g"));
        assert_eq!(portfolio.all_ids(), vec!["engine", "notes", "note-g"]);
    }

    #[test]
    fn test_entry_without_type_is_rejected() {
        let json = r#"{
            "name": "A", "title": "B", "email": "c@d.e",
            "projects": [{ "id": "x", "title": "X", "description": "", "github_url": "u" }]
        }"#;
        assert!(matches!(Portfolio::from_json(json), Err(PortfolioError::Parse(_))));
    }

    #[test]
    fn test_validation_reports_every_problem() {
        let json = r#"{
            "name": " ",
            "title": "B",
            "email": "c@d.e",
            "skills": [{ "category": "", "skills": ["Rust"] }],
            "projects": [
                { "type": "project", "id": "dup", "title": "One", "description": "", "github_url": "u" },
                {
                    "type": "collection", "id": "group", "title": "Group", "description": "",
                    "projects": [
                        { "id": "dup", "title": "Two", "description": "", "github_url": "" }
                    ]
                }
            ]
        }"#;

        match Portfolio::from_json(json) {
            Err(PortfolioError::Invalid(problems)) => {
                assert!(problems.contains(&"name is empty".to_string()));
                assert!(problems.contains(&"skill category #1 has no name".to_string()));
                assert!(problems.contains(&"project 'dup' has no repository link".to_string()));
                assert!(problems.contains(&"duplicate project id 'dup'".to_string()));
                assert_eq!(problems.len(), 4);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    fn problems_for(projects: &str) -> Vec<String> {
        let json = format!(
            r#"{{ "name": "A", "title": "B", "email": "c@d.e", "projects": [{}] }}"#,
            projects
        );
        match Portfolio::from_json(&json) {
            Err(PortfolioError::Invalid(problems)) => problems,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_collection_named_after_section_is_rejected() {
        let problems = problems_for(
            r#"{ "type": "collection", "id": "contact", "title": "C", "description": "" }"#,
        );
        assert_eq!(
            problems,
            vec!["'contact' renders element id 'contact', which the page already uses".to_string()]
        );
    }

    #[test]
    fn test_collection_named_after_nav_is_rejected() {
        let problems = problems_for(
            r#"{ "type": "collection", "id": "site-nav", "title": "N", "description": "" }"#,
        );
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("'site-nav'"));
    }

    #[test]
    fn test_derived_element_ids_must_not_collide() {
        // "project-engine" is both a collection and the engine card's id
        let problems = problems_for(
            r#"{ "type": "project", "id": "engine", "title": "E", "description": "", "github_url": "u" },
               { "type": "collection", "id": "project-engine", "title": "P", "description": "" }"#,
        );
        assert_eq!(
            problems,
            vec!["'project-engine' renders element id 'project-engine', already rendered by 'engine'"
                .to_string()]
        );

        // "tools-projects" collides with the "tools" collection's panel
        let problems = problems_for(
            r#"{ "type": "collection", "id": "tools", "title": "T", "description": "" },
               { "type": "collection", "id": "tools-projects", "title": "T2", "description": "" }"#,
        );
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("already rendered by 'tools'"));
    }

    #[test]
    fn test_section_named_project_is_fine() {
        // The card renders as "project-skills", not "skills"
        let json = r#"{
            "name": "A", "title": "B", "email": "c@d.e",
            "projects": [{ "type": "project", "id": "skills", "title": "S", "description": "", "github_url": "u" }]
        }"#;
        assert!(Portfolio::from_json(json).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Portfolio::load(Path::new("/nonexistent/portfolio.json"));
        assert!(matches!(result, Err(PortfolioError::Io { .. })));
    }
}
