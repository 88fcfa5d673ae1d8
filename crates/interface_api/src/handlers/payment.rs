//! Payment handlers

use axum::{extract::State, http::StatusCode, Extension, Json};

use core_kernel::Money;
use domain_wallet::Recipient;
use infra_db::WalletRepository;

use crate::auth::AuthenticatedUser;
use crate::dto::payment::{PaymentHistoryEntry, PaymentRequest, PaymentResponse};
use crate::{error::ApiError, AppState, LEDGER_CURRENCY};

const HISTORY_LIMIT: i64 = 50;

/// Processes a payment with round-up spare-change allocation
pub async fn create_payment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), ApiError> {
    let recipient = Recipient::new(
        request.recipient_upi,
        request.recipient_phone,
        request.recipient_name,
    )
    .map_err(|e| ApiError::Validation(e.to_string()))?;

    let amount = Money::new(request.amount, LEDGER_CURRENCY);

    let wallets = WalletRepository::new(state.pool.clone());
    let outcome = wallets.process_payment(user.0, &recipient, amount).await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentResponse::from_breakdown(
            *outcome.payment_id.as_uuid(),
            &outcome.breakdown,
        )),
    ))
}

/// Lists the caller's payments, newest first
pub async fn list_payments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<PaymentHistoryEntry>>, ApiError> {
    let wallets = WalletRepository::new(state.pool.clone());
    let rows = wallets.payment_history(user.0, HISTORY_LIMIT).await?;

    Ok(Json(rows.into_iter().map(PaymentHistoryEntry::from).collect()))
}
