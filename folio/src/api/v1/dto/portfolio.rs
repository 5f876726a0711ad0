//! Portfolio content and contact form DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    BlogPost, ContactReceipt, ContactSubmission, Project, ProjectCategory, SocialLink, Skill,
    SkillCategory, TimelineEntry,
};

/// Query string accepted by the filterable list endpoints.
///
/// `category` is a category key such as `genai` or `cloud`; `all` or an
/// absent value returns everything.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams, utoipa::ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum V1ProjectCategory {
    Genai,
    Ml,
    Fullstack,
}

impl From<ProjectCategory> for V1ProjectCategory {
    fn from(category: ProjectCategory) -> Self {
        match category {
            ProjectCategory::Genai => V1ProjectCategory::Genai,
            ProjectCategory::Ml => V1ProjectCategory::Ml,
            ProjectCategory::Fullstack => V1ProjectCategory::Fullstack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum V1SkillCategory {
    Ai,
    Backend,
    Cloud,
    Tools,
}

impl From<SkillCategory> for V1SkillCategory {
    fn from(category: SkillCategory) -> Self {
        match category {
            SkillCategory::Ai => V1SkillCategory::Ai,
            SkillCategory::Backend => V1SkillCategory::Backend,
            SkillCategory::Cloud => V1SkillCategory::Cloud,
            SkillCategory::Tools => V1SkillCategory::Tools,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub metrics: String,
    pub category: V1ProjectCategory,
    /// Display label of the category, e.g. "GenAI & RAG".
    pub category_label: String,
    pub period: String,
    pub demo_available: bool,
}

impl From<&Project> for ProjectResponse {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.to_string(),
            description: p.description.to_string(),
            tech: p.tech.iter().map(|t| t.to_string()).collect(),
            metrics: p.metrics.to_string(),
            category: p.category.into(),
            category_label: p.category.label().to_string(),
            period: p.period.to_string(),
            demo_available: p.demo_available,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub id: String,
    pub label: String,
    pub category: V1SkillCategory,
    pub category_title: String,
    /// Proficiency from 1 to 5.
    pub level: u8,
}

impl From<&Skill> for SkillResponse {
    fn from(s: &Skill) -> Self {
        Self {
            id: s.id.to_string(),
            label: s.label.to_string(),
            category: s.category.into(),
            category_title: s.category.title().to_string(),
            level: s.level,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntryResponse {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub skills: Vec<String>,
}

impl From<&TimelineEntry> for TimelineEntryResponse {
    fn from(t: &TimelineEntry) -> Self {
        Self {
            period: t.period.to_string(),
            title: t.title.to_string(),
            organization: t.organization.to_string(),
            description: t.description.to_string(),
            skills: t.skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
}

impl From<&BlogPost> for PostResponse {
    fn from(p: &BlogPost) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.to_string(),
            excerpt: p.excerpt.to_string(),
            date: p.date.to_string(),
            read_time: p.read_time.to_string(),
            category: p.category.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LinkResponse {
    pub name: String,
    pub url: String,
}

impl From<&SocialLink> for LinkResponse {
    fn from(l: &SocialLink) -> Self {
        Self {
            name: l.name.to_string(),
            url: l.url.to_string(),
        }
    }
}

/// Request body for `POST /api/v1/contact`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactRequest> for ContactSubmission {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            message: req.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    #[schema(value_type = String)]
    pub receipt_id: Uuid,
    #[schema(value_type = String)]
    pub received_at: DateTime<Utc>,
    /// Always `"received"`.
    pub status: String,
}

impl From<ContactReceipt> for ContactResponse {
    fn from(receipt: ContactReceipt) -> Self {
        Self {
            receipt_id: receipt.id,
            received_at: receipt.received_at,
            status: "received".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryFilter;
    use crate::portfolio::Catalog;

    #[test]
    fn project_response_is_camel_case() {
        let project = Catalog.projects(CategoryFilter::All)[0];
        let json = serde_json::to_value(ProjectResponse::from(project)).expect("serialize");
        assert!(json.get("demoAvailable").is_some());
        assert!(json.get("categoryLabel").is_some());
        assert!(json.get("demo_available").is_none());
    }

    #[test]
    fn contact_response_reports_received() {
        let json =
            serde_json::to_value(ContactResponse::from(ContactReceipt::new())).expect("serialize");
        assert_eq!(json["status"], "received");
        assert!(json["receiptId"].is_string());
    }
}
