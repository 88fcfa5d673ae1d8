//! Investment handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use core_kernel::Money;
use infra_db::{AccountRepository, WalletRepository};

use crate::auth::AuthenticatedUser;
use crate::dto::investment::*;
use crate::{error::ApiError, AppState, LEDGER_CURRENCY};

/// Lists the static investment product catalog (public)
pub async fn list_options() -> Json<Vec<InvestmentOption>> {
    Json(investment_options())
}

/// Records an investment funded from the investment wallet
pub async fn create_investment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<InvestRequest>,
) -> Result<(StatusCode, Json<InvestResponse>), ApiError> {
    request.validate()?;

    let amount = Money::new(request.amount, LEDGER_CURRENCY);

    let wallets = WalletRepository::new(state.pool.clone());
    let investment_id = wallets
        .record_investment(
            user.0,
            &request.investment_name,
            &request.investment_type,
            amount,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InvestResponse {
            message: "Investment created successfully".to_string(),
            investment_id,
        }),
    ))
}

/// Lists the caller's investments, newest first
pub async fn investment_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<InvestmentHistoryEntry>>, ApiError> {
    let wallets = WalletRepository::new(state.pool.clone());
    let rows = wallets.list_investments(user.0).await?;

    Ok(Json(rows.into_iter().map(InvestmentHistoryEntry::from).collect()))
}

/// Investment wallet balance plus total invested so far
pub async fn investment_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<InvestmentStatsResponse>, ApiError> {
    let accounts = AccountRepository::new(state.pool.clone());
    let wallets = WalletRepository::new(state.pool.clone());

    let snapshot = accounts.wallet_snapshot(user.0).await?;
    let total_invested = wallets.total_invested(user.0).await?;

    Ok(Json(InvestmentStatsResponse {
        current_investment_wallet: snapshot.investment_wallet,
        total_invested,
    }))
}
