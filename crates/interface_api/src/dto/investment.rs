//! Investment DTOs and the static product catalog

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use infra_db::repositories::wallet::InvestmentRow;

#[derive(Debug, Deserialize, Validate)]
pub struct InvestRequest {
    #[validate(length(min = 1, message = "investment name must not be empty"))]
    pub investment_name: String,
    #[validate(length(min = 1, message = "investment type must not be empty"))]
    pub investment_type: String,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct InvestResponse {
    pub message: String,
    pub investment_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct InvestmentHistoryEntry {
    pub id: Uuid,
    pub transaction_id: Uuid,
    pub investment_name: String,
    pub investment_type: String,
    pub amount: Decimal,
    pub invested_at: DateTime<Utc>,
}

impl From<InvestmentRow> for InvestmentHistoryEntry {
    fn from(row: InvestmentRow) -> Self {
        Self {
            id: row.id,
            transaction_id: row.transaction_id,
            investment_name: row.investment_name,
            investment_type: row.investment_type,
            amount: row.amount,
            invested_at: row.invested_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvestmentStatsResponse {
    pub current_investment_wallet: Decimal,
    pub total_invested: Decimal,
}

/// A product in the static investment catalog
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentOption {
    pub id: &'static str,
    pub name: &'static str,
    pub investment_type: &'static str,
    pub category: &'static str,
    pub risk: &'static str,
    pub volatility: u32,
    pub analyst_rating: &'static str,
    pub projected_growth: &'static str,
    pub description: &'static str,
}

/// The catalog of investable products
///
/// Reference data shipped with the application; recording an investment
/// stores the chosen name and type, not a foreign key into this list.
pub fn investment_options() -> Vec<InvestmentOption> {
    vec![
        InvestmentOption {
            id: "00815374-5d2d-487b-bfcf-d1e2667b3287",
            name: "Tech Innovators Fund",
            investment_type: "mutual-fund",
            category: "Technology",
            risk: "High",
            volatility: 15,
            analyst_rating: "4.5",
            projected_growth: "18-25%",
            description: "Invests in high-growth technology companies.",
        },
        InvestmentOption {
            id: "908b91d7-f57b-421a-83f9-b6ec3503ce59",
            name: "Global Green Energy ETF",
            investment_type: "etf",
            category: "Renewables",
            risk: "Medium",
            volatility: 12,
            analyst_rating: "4.0",
            projected_growth: "10-15%",
            description: "Tracks leading companies in the renewable energy sector.",
        },
        InvestmentOption {
            id: "fc0a6916-e2d5-4205-9281-19caad730390",
            name: "Blue Chip Stock Portfolio",
            investment_type: "stock",
            category: "Diversified",
            risk: "Low",
            volatility: 8,
            analyst_rating: "4.8",
            projected_growth: "5-8%",
            description: "A collection of stable, well-established companies.",
        },
        InvestmentOption {
            id: "67274cb5-d9c4-401b-8838-df85f44a74a9",
            name: "Emerging Markets Bond Fund",
            investment_type: "mutual-fund",
            category: "Bonds",
            risk: "Medium",
            volatility: 10,
            analyst_rating: "3.5",
            projected_growth: "7-10%",
            description: "Fixed-income investments in developing economies.",
        },
    ]
}
