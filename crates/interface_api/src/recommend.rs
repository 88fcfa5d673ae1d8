//! Recommendation provider boundary
//!
//! The external scoring service is best-effort: calls carry a bounded
//! timeout and any failure falls back to a deterministic catalog-based
//! list. Nothing in the ledger core depends on this output.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use infra_db::repositories::catalog::CharityRow;

/// A ranked charity candidate returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharityRecommendation {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub match_score: i32,
    pub recommendation_type: String,
    pub primary_reason: String,
    pub trust_score: Option<i32>,
    pub transparency_score: Option<i32>,
    pub efficiency_score: Option<i32>,
    pub impact: Option<String>,
}

/// Errors from the recommendation boundary
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Recommendation service unavailable: {0}")]
    Unavailable(String),
}

/// Source of ranked charity candidates
///
/// The core treats whatever comes back as an opaque list; implementations
/// must bound their own latency.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(&self, user_id: Uuid)
        -> Result<Vec<CharityRecommendation>, RecommendError>;
}

/// Provider backed by the external scoring service
#[derive(Debug, Clone)]
pub struct HttpRecommendationProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecommendationProvider {
    /// Creates a provider with a hard timeout on every call
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn recommend(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CharityRecommendation>, RecommendError> {
        let url = format!(
            "{}/api/ml/donations/recommendations/{}",
            self.base_url, user_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RecommendError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| RecommendError::Unavailable(e.to_string()))?;

        response
            .json::<Vec<CharityRecommendation>>()
            .await
            .map_err(|e| RecommendError::Unavailable(e.to_string()))
    }
}

/// Builds the deterministic catalog fallback: the first three charities,
/// scored by their own trust figures rather than anything invented
pub fn fallback_from_catalog(charities: &[CharityRow]) -> Vec<CharityRecommendation> {
    charities
        .iter()
        .take(3)
        .map(|charity| CharityRecommendation {
            id: charity.id,
            name: charity.name.clone(),
            category: charity.category.clone(),
            description: charity.description.clone(),
            location: charity.location.clone(),
            match_score: charity.trust_score.unwrap_or(0),
            recommendation_type: "catalog_fallback".to_string(),
            primary_reason: "A verified charity with a strong track record.".to_string(),
            trust_score: charity.trust_score,
            transparency_score: charity.transparency_score,
            efficiency_score: charity.efficiency_score,
            impact: charity.impact.clone(),
        })
        .collect()
}

/// Tries the provider, falling back to the catalog list on any failure
pub async fn recommendations_with_fallback(
    provider: &dyn RecommendationProvider,
    user_id: Uuid,
    catalog: &[CharityRow],
) -> Vec<CharityRecommendation> {
    match provider.recommend(user_id).await {
        Ok(recommendations) if !recommendations.is_empty() => recommendations,
        Ok(_) => fallback_from_catalog(catalog),
        Err(e) => {
            warn!("Recommendation service failed, using catalog fallback: {}", e);
            fallback_from_catalog(catalog)
        }
    }
}
