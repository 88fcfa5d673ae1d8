//! Signup and login handlers

use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::Decimal;
use validator::Validate;

use infra_db::repositories::account::NewAccount;
use infra_db::AccountRepository;

use crate::auth::{create_token, hash_password, verify_password};
use crate::dto::auth::*;
use crate::{error::ApiError, AppState};

/// Creates an account with zeroed wallets and the default 40/40/20 split
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    request.validate()?;

    let password_hash =
        hash_password(&request.password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let accounts = AccountRepository::new(state.pool.clone());
    let row = accounts
        .create_account(NewAccount {
            full_name: request.name,
            email: request.email,
            password_hash,
            upi_id: request.upi_id,
            opening_balance: request.initial_balance.unwrap_or(Decimal::ZERO),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Signup successful".to_string(),
            user: UserSummary {
                id: row.id,
                name: row.full_name,
                email: row.email,
            },
        }),
    ))
}

/// Verifies credentials and issues a JWT
///
/// Unknown email and wrong password produce the same response, so the
/// endpoint cannot be used to probe for registered addresses.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let accounts = AccountRepository::new(state.pool.clone());
    let auth_row = accounts
        .find_auth_by_email(&request.email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let valid = verify_password(&request.password, &auth_row.password_hash)
        .map_err(|_| ApiError::Unauthorized)?;
    if !valid {
        return Err(ApiError::Unauthorized);
    }

    let token = create_token(
        auth_row.id,
        &auth_row.full_name,
        &auth_row.email,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserSummary {
            id: auth_row.id,
            name: auth_row.full_name,
            email: auth_row.email,
        },
    }))
}
