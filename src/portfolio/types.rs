//! Portfolio content types
//!
//! Mirrors the designer-authored data file. Optional links are plain strings
//! where empty means "not present"; use the accessor methods rather than
//! checking emptiness at each call site.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub site: SiteMeta,
}

fn default_resume_url() -> String {
    "/assets/resume.pdf".to_string()
}

impl Portfolio {
    /// First word of the name, used by the footer wordmark
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn collection(&self, id: &str) -> Option<&ProjectCollection> {
        self.projects.iter().find_map(|entry| match entry {
            ProjectEntry::Collection(c) if c.id == id => Some(c),
            _ => None,
        })
    }

    /// Ids of every top-level entry and every project nested in a collection
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for entry in &self.projects {
            ids.push(entry.id());
            if let ProjectEntry::Collection(c) = entry {
                ids.extend(c.projects.iter().map(|p| p.id.as_str()));
            }
        }
        ids
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

impl Socials {
    pub fn github(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    pub fn linkedin(&self) -> Option<&str> {
        non_empty(&self.linkedin)
    }

    pub fn twitter(&self) -> Option<&str> {
        non_empty(&self.twitter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectEntry {
    Project(Project),
    Collection(ProjectCollection),
}

impl ProjectEntry {
    pub fn id(&self) -> &str {
        match self {
            ProjectEntry::Project(p) => &p.id,
            ProjectEntry::Collection(c) => &c.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub learnings: String,
    pub github_url: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub image: String,
}

impl Project {
    /// DOM id of the rendered project card
    pub fn element_id(&self) -> String {
        format!("project-{}", self.id)
    }

    pub fn live_url(&self) -> Option<&str> {
        non_empty(&self.live_url)
    }

    pub fn learnings(&self) -> Option<&str> {
        non_empty(&self.learnings)
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCollection {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: CollectionIcon,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionIcon {
    Minecraft,
    Web,
    Mobile,
    Api,
    #[default]
    Default,
}

impl ProjectCollection {
    /// DOM id of the collection card; also its toggle redirect anchor
    pub fn element_id(&self) -> &str {
        &self.id
    }

    /// DOM id of the expanded sub-project list
    pub fn panel_id(&self) -> String {
        format!("{}-projects", self.id)
    }
}

impl CollectionIcon {
    pub fn slug(&self) -> &'static str {
        match self {
            CollectionIcon::Minecraft => "minecraft",
            CollectionIcon::Web => "web",
            CollectionIcon::Mobile => "mobile",
            CollectionIcon::Api => "api",
            CollectionIcon::Default => "default",
        }
    }
}

/// Page metadata for <head>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio | Developer".to_string(),
            description: "Personal portfolio showcasing my projects and skills as a developer".to_string(),
            keywords: vec![
                "developer".to_string(),
                "portfolio".to_string(),
                "projects".to_string(),
                "software engineer".to_string(),
            ],
        }
    }
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
