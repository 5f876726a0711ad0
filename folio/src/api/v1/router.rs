use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let sessions = Router::new()
        .route("/", post(handlers::chat::open_session))
        .route(
            "/{sessionId}",
            get(handlers::chat::get_session)
                .patch(handlers::chat::update_session)
                .delete(handlers::chat::close_session),
        )
        .route(
            "/{sessionId}/messages",
            post(handlers::chat::submit_message),
        )
        .route(
            "/{sessionId}/presets/{index}",
            post(handlers::chat::submit_preset),
        );

    let chat = Router::new()
        .route("/presets", get(handlers::chat::list_presets))
        .nest("/sessions", sessions);

    let field = Router::new()
        .route("/field", get(handlers::field::get_field))
        .route("/field:generate", post(handlers::field::generate_field))
        .route("/field/rotation", get(handlers::field::get_rotation));

    let portfolio = Router::new()
        .route("/projects", get(handlers::portfolio::list_projects))
        .route("/skills", get(handlers::portfolio::list_skills))
        .route("/timeline", get(handlers::portfolio::list_timeline))
        .route("/posts", get(handlers::portfolio::list_posts))
        .route("/links", get(handlers::portfolio::list_links))
        .route("/contact", post(handlers::contact::submit_contact));

    let meta = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    Router::new()
        .merge(meta)
        .nest("/chat", chat)
        .merge(field)
        .merge(portfolio)
}
