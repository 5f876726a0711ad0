use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Project grouping used by the projects filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Genai,
    Ml,
    Fullstack,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [Self::Genai, Self::Ml, Self::Fullstack];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Genai => "GenAI & RAG",
            Self::Ml => "Machine Learning",
            Self::Fullstack => "Full Stack",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Genai => write!(f, "genai"),
            Self::Ml => write!(f, "ml"),
            Self::Fullstack => write!(f, "fullstack"),
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "genai" => Ok(Self::Genai),
            "ml" => Ok(Self::Ml),
            "fullstack" => Ok(Self::Fullstack),
            _ => Err(format!("Unknown project category: {s}")),
        }
    }
}

/// Skill grouping used by the skills section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Ai,
    Backend,
    Cloud,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [Self::Ai, Self::Backend, Self::Cloud, Self::Tools];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Ai => "AI & Machine Learning",
            Self::Backend => "Backend & Databases",
            Self::Cloud => "Cloud Platforms",
            Self::Tools => "DevOps & Tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ai => write!(f, "ai"),
            Self::Backend => write!(f, "backend"),
            Self::Cloud => write!(f, "cloud"),
            Self::Tools => write!(f, "tools"),
        }
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ai" => Ok(Self::Ai),
            "backend" => Ok(Self::Backend),
            "cloud" => Ok(Self::Cloud),
            "tools" => Ok(Self::Tools),
            _ => Err(format!("Unknown skill category: {s}")),
        }
    }
}

/// Either every item, or only the items of one category.
///
/// Parses from `"all"` or any string the category itself accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl<C: FromStr<Err = String>> FromStr for CategoryFilter<C> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.trim().parse().map(Self::Only)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub metrics: &'static str,
    pub category: ProjectCategory,
    pub period: &'static str,
    pub demo_available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub id: &'static str,
    pub label: &'static str,
    pub category: SkillCategory,
    /// Proficiency from 1 to 5
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Message sent from the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// Acknowledgement returned once a contact submission has been accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl ContactReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for ContactReceipt {
    fn default() -> Self {
        Self::new()
    }
}
