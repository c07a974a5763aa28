//! Testing utilities including a mock enricher.
//!
//! Lets applications exercise the enrichment path without network calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{EnrichmentError, Result};
use crate::traits::enricher::{Enricher, EnrichmentPayload, EnrichmentRequest};

/// What the mock answers with.
#[derive(Debug, Clone)]
enum MockResponse {
    Payload(EnrichmentPayload),
    Failure(String),
}

/// A mock enricher returning a fixed payload or a fixed network failure.
///
/// Every request is recorded for assertions.
pub struct MockEnricher {
    response: MockResponse,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<EnrichmentRequest>>>,
}

impl MockEnricher {
    /// Always return `payload`.
    pub fn returning(payload: EnrichmentPayload) -> Self {
        Self {
            response: MockResponse::Payload(payload),
            calls: Arc::default(),
        }
    }

    /// Always fail with a network error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Failure(message.into()),
            calls: Arc::default(),
        }
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<EnrichmentRequest> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Enricher for MockEnricher {
    async fn enrich(&self, request: &EnrichmentRequest) -> Result<EnrichmentPayload> {
        self.calls.write().unwrap().push(request.clone());

        match &self.response {
            MockResponse::Payload(payload) => Ok(payload.clone()),
            MockResponse::Failure(message) => Err(EnrichmentError::Network(message.clone())),
        }
    }
}
