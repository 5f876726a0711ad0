//! v1 portfolio content handlers. All content is static; the only input is
//! the optional category filter.

use axum::extract::{Query, State};

use crate::api::v1::dto::{
    CategoryQuery, LinkResponse, PostResponse, ProjectResponse, SkillResponse,
    TimelineEntryResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::models::{CategoryFilter, ProjectCategory, SkillCategory};

fn listed<T: serde::Serialize>(items: Vec<T>) -> ApiResponse<Vec<T>> {
    let total = items.len() as u64;
    ApiResponse::success_with_meta(items, ResponseMeta { total })
}

/// `GET /api/v1/projects`
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "portfolio",
    operation_id = "projects.list",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Projects in catalog order", body = Vec<ProjectResponse>),
        (status = 400, description = "Unknown category", body = ApiError),
    )
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResponse<Vec<ProjectResponse>> {
    let filter: CategoryFilter<ProjectCategory> =
        match query.category.as_deref().unwrap_or_default().parse() {
            Ok(filter) => filter,
            Err(message) => return ApiResponse::error(ErrorCode::InvalidRequest, message),
        };

    listed(
        state
            .catalog
            .projects(filter)
            .into_iter()
            .map(ProjectResponse::from)
            .collect(),
    )
}

/// `GET /api/v1/skills`
#[utoipa::path(
    get,
    path = "/api/v1/skills",
    tag = "portfolio",
    operation_id = "skills.list",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Skills in catalog order", body = Vec<SkillResponse>),
        (status = 400, description = "Unknown category", body = ApiError),
    )
)]
pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResponse<Vec<SkillResponse>> {
    let filter: CategoryFilter<SkillCategory> =
        match query.category.as_deref().unwrap_or_default().parse() {
            Ok(filter) => filter,
            Err(message) => return ApiResponse::error(ErrorCode::InvalidRequest, message),
        };

    listed(
        state
            .catalog
            .skills(filter)
            .into_iter()
            .map(SkillResponse::from)
            .collect(),
    )
}

/// `GET /api/v1/timeline`
#[utoipa::path(
    get,
    path = "/api/v1/timeline",
    tag = "portfolio",
    operation_id = "timeline.list",
    responses(
        (status = 200, description = "Career timeline, most recent first", body = Vec<TimelineEntryResponse>),
    )
)]
pub async fn list_timeline(
    State(state): State<AppState>,
) -> ApiResponse<Vec<TimelineEntryResponse>> {
    listed(
        state
            .catalog
            .timeline()
            .iter()
            .map(TimelineEntryResponse::from)
            .collect(),
    )
}

/// `GET /api/v1/posts`
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "portfolio",
    operation_id = "posts.list",
    responses(
        (status = 200, description = "Blog post previews", body = Vec<PostResponse>),
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> ApiResponse<Vec<PostResponse>> {
    listed(state.catalog.posts().iter().map(PostResponse::from).collect())
}

/// `GET /api/v1/links`
#[utoipa::path(
    get,
    path = "/api/v1/links",
    tag = "portfolio",
    operation_id = "links.list",
    responses(
        (status = 200, description = "Social links", body = Vec<LinkResponse>),
    )
)]
pub async fn list_links(State(state): State<AppState>) -> ApiResponse<Vec<LinkResponse>> {
    listed(state.catalog.links().iter().map(LinkResponse::from).collect())
}
