//! HTTP API Layer
//!
//! This crate provides the REST API for the round-up ledger using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Stable error codes per failure class
//!
//! Every authenticated operation acts on the user identified by the
//! verified JWT; account ids in request bodies are never trusted.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;
pub mod recommend;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::Currency;

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, donation, health, investment, payment, savings, wallet};
use crate::middleware::{audit_middleware, auth_middleware};
use crate::recommend::{HttpRecommendationProvider, RecommendationProvider};

/// The single currency every wallet and payment is denominated in
pub const LEDGER_CURRENCY: Currency = Currency::INR;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
    pub recommender: Arc<dyn RecommendationProvider>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let recommender = Arc::new(HttpRecommendationProvider::new(
        config.recommendation_url.clone(),
        Duration::from_secs(config.recommendation_timeout_secs),
    ));
    create_router_with_recommender(pool, config, recommender)
}

/// Creates the router with an explicit recommendation provider
///
/// Tests use this to swap the external service for a stub.
pub fn create_router_with_recommender(
    pool: PgPool,
    config: ApiConfig,
    recommender: Arc<dyn RecommendationProvider>,
) -> Router {
    let state = AppState {
        pool,
        config,
        recommender,
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/auth/signup", post(auth_handlers::signup))
        .route("/api/auth/login", post(auth_handlers::login))
        .route("/api/charities", get(donation::list_charities))
        .route("/api/charities/:id", get(donation::get_charity))
        .route("/api/investments/options", get(investment::list_options));

    // Wallet routes
    let wallet_routes = Router::new()
        .route("/", get(wallet::get_wallet))
        .route("/split", put(wallet::update_split));

    // Payment routes
    let payment_routes = Router::new()
        .route("/", post(payment::create_payment))
        .route("/", get(payment::list_payments));

    // Donation routes
    let donation_routes = Router::new()
        .route("/", post(donation::create_donation))
        .route("/", get(donation::list_donations))
        .route("/stats", get(donation::donation_stats))
        .route("/recommendations", get(donation::recommendations));

    // Investment routes
    let investment_routes = Router::new()
        .route("/", post(investment::create_investment))
        .route("/history", get(investment::investment_history))
        .route("/stats", get(investment::investment_stats));

    // Savings routes
    let savings_routes = Router::new()
        .route("/", get(savings::savings_overview))
        .route("/goals", post(savings::create_goal))
        .route("/goals/:id", delete(savings::delete_goal))
        .route("/goals/:id/contributions", post(savings::contribute));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/wallet", wallet_routes)
        .nest("/payments", payment_routes)
        .nest("/donations", donation_routes)
        .nest("/investments", investment_routes)
        .nest("/savings", savings_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
