use std::sync::Arc;

use crate::config::Config;
use crate::themes::ThemeRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled theme templates; built once at startup, read-only afterwards.
    pub themes: Arc<ThemeRegistry>,
    /// Outbound client for render-by-URL requests.
    pub http: reqwest::Client,
}
