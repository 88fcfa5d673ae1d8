//! Savings DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use infra_db::repositories::goal::{GoalHistoryRow, GoalRow};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGoalRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateGoalResponse {
    pub message: String,
    pub goal_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ContributeRequest {
    pub amount: Decimal,
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContributeResponse {
    pub message: String,
    pub goal_id: Uuid,
    pub current_amount: Decimal,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct GoalBody {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: String,
    pub achieved_amount: Option<Decimal>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<GoalRow> for GoalBody {
    fn from(row: GoalRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            target_amount: row.target_amount,
            current_amount: row.current_amount,
            target_date: row.target_date,
            category: row.category,
            priority: row.priority,
            status: row.status,
            achieved_amount: row.achieved_amount,
            completed_at: row.completed_at,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavingsHistoryEntry {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub goal_title: String,
    pub amount: Decimal,
    pub source: String,
    pub transaction_type: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<GoalHistoryRow> for SavingsHistoryEntry {
    fn from(row: GoalHistoryRow) -> Self {
        Self {
            id: row.id,
            goal_id: row.goal_id,
            goal_title: row.goal_title,
            amount: row.amount,
            source: row.source,
            transaction_type: row.transaction_type,
            recorded_at: row.recorded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavingsOverviewResponse {
    pub total_spare_change: Decimal,
    pub savings_allocation: i32,
    pub savings_wallet: Decimal,
    pub savings_goals: Vec<GoalBody>,
    pub achieved_goals: Vec<GoalBody>,
    pub savings_history: Vec<SavingsHistoryEntry>,
    pub this_month_saved: Decimal,
    pub avg_monthly_saving: Decimal,
}
