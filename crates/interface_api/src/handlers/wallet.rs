//! Wallet snapshot and split handlers

use axum::{extract::State, Extension, Json};

use domain_allocation::SplitPercentages;
use infra_db::{AccountRepository, WalletRepository};

use crate::auth::AuthenticatedUser;
use crate::dto::wallet::{SplitRequest, WalletResponse};
use crate::dto::AckResponse;
use crate::{error::ApiError, AppState};

/// Returns the caller's balances, split percentages, and spare-change total
pub async fn get_wallet(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<WalletResponse>, ApiError> {
    let accounts = AccountRepository::new(state.pool.clone());
    let snapshot = accounts.wallet_snapshot(user.0).await?;

    Ok(Json(WalletResponse::from(snapshot)))
}

/// Overwrites the caller's allocation split
///
/// Applies only to payments initiated after the update.
pub async fn update_split(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<SplitRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    let split = SplitPercentages::new(request.donation, request.investment, request.savings)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let wallets = WalletRepository::new(state.pool.clone());
    wallets.update_split(user.0, split).await?;

    Ok(Json(AckResponse::new("Allocation updated")))
}
