pub mod health;
pub mod render;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/themes", get(render::handle_list_themes))
        .route("/api/v1/render", post(render::handle_render))
        .route("/api/v1/render/url", get(render::handle_render_url))
        .with_state(state)
}
