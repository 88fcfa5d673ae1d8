//! Donation DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use infra_db::repositories::catalog::CharityRow;
use infra_db::repositories::wallet::DonationRow;

#[derive(Debug, Deserialize)]
pub struct DonationRequest {
    /// Target charity by id; takes precedence over `organization`
    pub charity_id: Option<Uuid>,
    /// Target charity by exact name
    pub organization: Option<String>,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct DonationResponse {
    pub message: String,
    pub donation_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DonationHistoryEntry {
    pub id: Uuid,
    pub charity_id: Uuid,
    pub charity_name: String,
    pub amount: Decimal,
    pub donated_at: DateTime<Utc>,
    pub source: String,
    pub impact: Option<String>,
}

impl From<DonationRow> for DonationHistoryEntry {
    fn from(row: DonationRow) -> Self {
        Self {
            id: row.id,
            charity_id: row.charity_id,
            charity_name: row.charity_name,
            amount: row.amount,
            donated_at: row.donated_at,
            source: row.source,
            impact: row.impact,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DonationStatsResponse {
    pub total_donated: Decimal,
    pub this_month: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CharityResponse {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub verified: bool,
    pub rating: Option<Decimal>,
    pub description: Option<String>,
    pub trust_score: Option<i32>,
    pub transparency_score: Option<i32>,
    pub impact: Option<String>,
    pub efficiency_score: Option<i32>,
}

impl From<CharityRow> for CharityResponse {
    fn from(row: CharityRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            location: row.location,
            verified: row.verified,
            rating: row.rating,
            description: row.description,
            trust_score: row.trust_score,
            transparency_score: row.transparency_score,
            impact: row.impact,
            efficiency_score: row.efficiency_score,
        }
    }
}
