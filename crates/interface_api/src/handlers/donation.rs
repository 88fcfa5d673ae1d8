//! Donation and charity handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use core_kernel::{CharityId, Money};
use infra_db::{CatalogRepository, CharityRef, WalletRepository};

use crate::auth::AuthenticatedUser;
use crate::dto::donation::*;
use crate::recommend::{recommendations_with_fallback, CharityRecommendation};
use crate::{error::ApiError, AppState, LEDGER_CURRENCY};

/// Lists the charity catalog (public)
pub async fn list_charities(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharityResponse>>, ApiError> {
    let catalog = CatalogRepository::new(state.pool.clone());
    let rows = catalog.list_charities().await?;

    Ok(Json(rows.into_iter().map(CharityResponse::from).collect()))
}

/// Fetches a single charity by id (public)
pub async fn get_charity(
    State(state): State<AppState>,
    Path(charity_id): Path<Uuid>,
) -> Result<Json<CharityResponse>, ApiError> {
    let catalog = CatalogRepository::new(state.pool.clone());
    let row = catalog
        .find_charity(&CharityRef::Id(CharityId::from_uuid(charity_id)))
        .await?;

    Ok(Json(CharityResponse::from(row)))
}

/// Records a donation funded from the donation wallet
pub async fn create_donation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<DonationRequest>,
) -> Result<(StatusCode, Json<DonationResponse>), ApiError> {
    let charity = match (request.charity_id, request.organization) {
        (Some(id), _) => CharityRef::Id(CharityId::from_uuid(id)),
        (None, Some(name)) => CharityRef::Name(name),
        (None, None) => {
            return Err(ApiError::Validation(
                "Either charity_id or organization is required".to_string(),
            ))
        }
    };

    let amount = Money::new(request.amount, LEDGER_CURRENCY);

    let wallets = WalletRepository::new(state.pool.clone());
    let donation_id = wallets.record_donation(user.0, &charity, amount).await?;

    Ok((
        StatusCode::CREATED,
        Json(DonationResponse {
            message: "Donation recorded successfully".to_string(),
            donation_id,
        }),
    ))
}

/// Lists the caller's donations, newest first
pub async fn list_donations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<DonationHistoryEntry>>, ApiError> {
    let wallets = WalletRepository::new(state.pool.clone());
    let rows = wallets.list_donations(user.0).await?;

    Ok(Json(rows.into_iter().map(DonationHistoryEntry::from).collect()))
}

/// Totals for the caller's donations
pub async fn donation_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<DonationStatsResponse>, ApiError> {
    let wallets = WalletRepository::new(state.pool.clone());
    let (total_donated, this_month) = wallets.donation_totals(user.0).await?;

    Ok(Json(DonationStatsResponse {
        total_donated,
        this_month,
    }))
}

/// Ranked charity candidates from the recommendation provider
///
/// Best-effort: any provider failure falls back to a deterministic
/// catalog-based list.
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<CharityRecommendation>>, ApiError> {
    let catalog = CatalogRepository::new(state.pool.clone());
    let charities = catalog.list_charities().await?;

    let recommendations =
        recommendations_with_fallback(state.recommender.as_ref(), user.0, &charities).await;

    Ok(Json(recommendations))
}
