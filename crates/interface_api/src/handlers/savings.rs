//! Savings goal handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{Money, UserId};
use domain_goals::SavingsGoal;
use infra_db::{AccountRepository, GoalRepository};

use crate::auth::AuthenticatedUser;
use crate::dto::savings::*;
use crate::dto::AckResponse;
use crate::{error::ApiError, AppState, LEDGER_CURRENCY};

const HISTORY_LIMIT: i64 = 50;

/// Full savings picture: wallet, goals, achieved goals, history, stats
pub async fn savings_overview(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<SavingsOverviewResponse>, ApiError> {
    let accounts = AccountRepository::new(state.pool.clone());
    let goals = GoalRepository::new(state.pool.clone());

    let snapshot = accounts.wallet_snapshot(user.0).await?;
    let all_goals = goals.list_goals(user.0).await?;
    let achieved = goals.list_achieved(user.0).await?;
    let history = goals.contribution_history(user.0, HISTORY_LIMIT).await?;
    let this_month_saved = goals.this_month_total(user.0).await?;
    let avg_monthly_saving = goals.avg_monthly_total(user.0).await?;

    Ok(Json(SavingsOverviewResponse {
        total_spare_change: snapshot.total_spare_change,
        savings_allocation: snapshot.savings_percentage,
        savings_wallet: snapshot.savings_wallet,
        savings_goals: all_goals.into_iter().map(GoalBody::from).collect(),
        achieved_goals: achieved.into_iter().map(GoalBody::from).collect(),
        savings_history: history.into_iter().map(SavingsHistoryEntry::from).collect(),
        this_month_saved,
        avg_monthly_saving,
    }))
}

/// Creates a goal in `InProgress` with nothing accumulated
pub async fn create_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<CreateGoalResponse>), ApiError> {
    request.validate()?;

    let target = Money::new(request.target_amount, LEDGER_CURRENCY);
    let mut goal = SavingsGoal::new(UserId::from_uuid(user.0), request.title, target)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if let Some(description) = request.description {
        goal = goal.with_description(description);
    }
    if let Some(date) = request.target_date {
        goal = goal.with_target_date(date);
    }
    if let Some(category) = request.category {
        goal = goal.with_category(category);
    }
    if let Some(priority) = request.priority {
        goal = goal.with_priority(priority);
    }

    let goals = GoalRepository::new(state.pool.clone());
    let goal_id = goals.create_goal(&goal).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateGoalResponse {
            message: "Goal created successfully".to_string(),
            goal_id: *goal_id.as_uuid(),
        }),
    ))
}

/// Deletes a goal and its history
pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Json<AckResponse>, ApiError> {
    let goals = GoalRepository::new(state.pool.clone());
    goals.delete_goal(user.0, goal_id).await?;

    Ok(Json(AckResponse::new("Goal deleted successfully")))
}

/// Contributes to a goal from the savings wallet
pub async fn contribute(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(goal_id): Path<Uuid>,
    Json(request): Json<ContributeRequest>,
) -> Result<Json<ContributeResponse>, ApiError> {
    let amount = Money::new(request.amount, LEDGER_CURRENCY);

    let goals = GoalRepository::new(state.pool.clone());
    let outcome = goals
        .contribute(user.0, goal_id, amount, request.source)
        .await?;

    Ok(Json(ContributeResponse {
        message: if outcome.completed {
            "Goal completed".to_string()
        } else {
            "Money added successfully".to_string()
        },
        goal_id,
        current_amount: outcome.new_amount.amount(),
        completed: outcome.completed,
    }))
}
