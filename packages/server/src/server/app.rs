//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    routing::{get, post},
    Router,
};
use seo_meta::{MetaGenerator, OpenAIEnricher};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::routes::{health_handler, index_handler, upload_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<MetaGenerator>,
}

impl AppState {
    pub fn new(generator: MetaGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Build the metadata generator, attaching the OpenAI enricher when a key is set.
pub fn build_generator(config: &Config) -> MetaGenerator {
    let Some(api_key) = config.openai_api_key.as_deref() else {
        tracing::info!("OPENAI_API_KEY not set, using rule-based generation only");
        return MetaGenerator::new();
    };

    let mut enricher = OpenAIEnricher::new(api_key).with_model(config.llm_model.clone());
    if let Some(base_url) = config.openai_base_url.as_deref() {
        enricher = enricher.with_base_url(base_url);
    }

    tracing::info!(model = %config.llm_model, "LLM enrichment enabled");
    MetaGenerator::new().with_enricher(Arc::new(enricher))
}

/// Build the Axum application router from configuration
pub fn build_app(config: &Config) -> Router {
    let state = AppState::new(build_generator(config));
    build_router(state, config.max_upload_bytes)
}

/// Build the router around an existing state
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
