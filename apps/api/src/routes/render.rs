//! Render endpoints: theme dispatch over HTTP.
//!
//! Query parameters mirror the render controls: `theme` picks the renderer,
//! `variations`/`seed` override the document's own control fields when
//! present (an absent parameter leaves the document field standing).

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeSchema;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub theme: Option<String>,
    pub variations: Option<bool>,
    pub seed: Option<String>,
}

// Kept flat (no serde(flatten)); urlencoded deserialization of flattened
// structs loses primitive types like Option<bool>.
#[derive(Debug, Deserialize)]
pub struct RenderUrlQuery {
    pub url: String,
    pub theme: Option<String>,
    pub variations: Option<bool>,
    pub seed: Option<String>,
}

impl RenderUrlQuery {
    fn render_params(&self) -> RenderQuery {
        RenderQuery {
            theme: self.theme.clone(),
            variations: self.variations,
            seed: self.seed.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ThemesResponse {
    pub themes: Vec<&'static str>,
    pub default: String,
}

/// Applies the query-level render controls onto the document.
fn apply_render_controls(resume: &mut ResumeSchema, params: &RenderQuery) {
    if let Some(variations) = params.variations {
        resume.enable_variations = Some(variations);
    }
    if let Some(seed) = params.seed.as_deref().filter(|s| !s.is_empty()) {
        resume.variation_seed = Some(seed.to_string());
    }
}

fn render(
    state: &AppState,
    params: &RenderQuery,
    mut resume: ResumeSchema,
) -> Result<Html<String>, AppError> {
    apply_render_controls(&mut resume, params);
    let theme = params
        .theme
        .as_deref()
        .unwrap_or(&state.config.default_theme);

    let html = state.themes.render(theme, &resume)?;
    info!(theme, bytes = html.len(), "Rendered resume");
    Ok(Html(html))
}

/// POST /api/v1/render
/// Body: a JSON Resume document. Response: text/html.
pub async fn handle_render(
    State(state): State<AppState>,
    Query(params): Query<RenderQuery>,
    Json(resume): Json<ResumeSchema>,
) -> Result<Html<String>, AppError> {
    render(&state, &params, resume)
}

/// GET /api/v1/render/url
/// Fetches a resume document from a remote URL and renders it.
pub async fn handle_render_url(
    State(state): State<AppState>,
    Query(params): Query<RenderUrlQuery>,
) -> Result<Html<String>, AppError> {
    if params.url.is_empty() {
        return Err(AppError::Validation("url must not be empty".to_string()));
    }

    let response = state
        .http
        .get(&params.url)
        .send()
        .await
        .map_err(|e| AppError::UpstreamFetch(format!("Failed to fetch resume: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::UpstreamFetch(format!(
            "Failed to fetch resume data: {}",
            response.status()
        )));
    }

    let resume: ResumeSchema = response
        .json()
        .await
        .map_err(|e| AppError::UpstreamFetch(format!("Resume document is not valid JSON: {e}")))?;

    render(&state, &params.render_params(), resume)
}

/// GET /api/v1/themes
pub async fn handle_list_themes(State(state): State<AppState>) -> Json<ThemesResponse> {
    Json(ThemesResponse {
        themes: state.themes.available(),
        default: state.config.default_theme.clone(),
    })
}
