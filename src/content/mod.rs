//! Static Content Store
//!
//! Read-only portfolio data (profile, projects, certifications, tech stack,
//! timeline and resume files) queried by the command dispatcher and the
//! suggestion engine. Content is described in TOML; a sample document is
//! compiled into the binary and used when no content file is configured.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sample content shipped with the crate
const BUILTIN_CONTENT: &str = include_str!("../../content/portfolio.toml");

/// Complete portfolio document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub stack: Stack,
    pub timeline: Vec<TimelineItem>,
    pub resume: Vec<ResumeFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub socials: Socials,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub x: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl Project {
    /// Preferred outbound link: the live demo, else the repository
    pub fn link(&self) -> Option<&str> {
        self.demo.as_deref().or(self.github.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub verify_url: Option<String>,
    pub certificate_id: Option<String>,
    pub issued_on: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stack {
    pub frontend: Vec<StackItem>,
    pub backend: Vec<StackItem>,
}

impl Stack {
    pub fn is_empty(&self) -> bool {
        self.frontend.is_empty() && self.backend.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackItem {
    pub name: String,
    pub kind: StackKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackKind {
    Language,
    Framework,
    Library,
    Runtime,
    Database,
    Api,
}

impl StackKind {
    /// Human label used in the stack overview
    pub fn label(self) -> &'static str {
        match self {
            StackKind::Language => "Language",
            StackKind::Framework => "Framework",
            StackKind::Library => "Library",
            StackKind::Runtime => "Runtime",
            StackKind::Database => "Database",
            StackKind::Api => "API",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(rename = "type")]
    pub kind: TimelineKind,
    pub title: String,
    pub org: String,
    pub start: String,
    pub end: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Education,
    Experience,
}

impl TimelineKind {
    pub fn title(self) -> &'static str {
        match self {
            TimelineKind::Education => "Education",
            TimelineKind::Experience => "Experience",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            TimelineKind::Education => "🎓",
            TimelineKind::Experience => "💼",
        }
    }
}

/// A downloadable resume in one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeFile {
    /// Short language code (`en`, `fr`, ...)
    pub lang: String,
    pub label: String,
    /// Root-relative path of the document
    pub path: String,
}

impl ResumeFile {
    /// File name offered when the document is fetched
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("resume.pdf")
    }
}

/// Read-only query surface over a [`Portfolio`]
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    portfolio: Portfolio,
}

impl ContentStore {
    /// Wrap an already-built portfolio document
    pub fn new(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }

    /// The sample content compiled into the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// Parse a TOML content document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(content)?;
        Ok(Self::new(portfolio))
    }

    /// Load a TOML content file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ContentLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let store = Self::from_toml_str(&content).map_err(|e| Error::ContentLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(
            "Loaded portfolio content from {} ({} projects)",
            path.display(),
            store.projects().len()
        );
        Ok(store)
    }

    pub fn profile(&self) -> &Profile {
        &self.portfolio.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.portfolio.projects
    }

    /// Project by 1-based position
    pub fn project_at(&self, index: usize) -> Option<&Project> {
        index
            .checked_sub(1)
            .and_then(|i| self.portfolio.projects.get(i))
    }

    /// Case-insensitive lookup by exact name
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        let wanted = name.to_lowercase();
        self.portfolio
            .projects
            .iter()
            .find(|p| p.name.to_lowercase() == wanted)
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.portfolio.certifications
    }

    pub fn stack(&self) -> &Stack {
        &self.portfolio.stack
    }

    /// Timeline entries of one kind, in document order
    pub fn timeline(&self, kind: TimelineKind) -> impl Iterator<Item = &TimelineItem> {
        self.portfolio
            .timeline
            .iter()
            .filter(move |item| item.kind == kind)
    }

    pub fn resumes(&self) -> &[ResumeFile] {
        &self.portfolio.resume
    }

    pub fn resume(&self, lang: &str) -> Option<&ResumeFile> {
        self.portfolio.resume.iter().find(|r| r.lang == lang)
    }

    /// Language codes with a resume, in document order
    pub fn resume_languages(&self) -> Vec<&str> {
        self.portfolio
            .resume
            .iter()
            .map(|r| r.lang.as_str())
            .collect()
    }
}
