//! Payment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_allocation::SpareChangeBreakdown;
use infra_db::repositories::wallet::PaymentRow;

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub recipient_upi: Option<String>,
    pub recipient_phone: Option<String>,
    pub recipient_name: Option<String>,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct AllocationBody {
    pub donation: Decimal,
    pub investment: Decimal,
    pub savings: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment_id: Uuid,
    pub original_amount: Decimal,
    pub rounded_amount: Decimal,
    pub spare_change: Decimal,
    pub allocation: AllocationBody,
}

impl PaymentResponse {
    pub fn from_breakdown(payment_id: Uuid, breakdown: &SpareChangeBreakdown) -> Self {
        Self {
            payment_id,
            original_amount: breakdown.original.amount(),
            rounded_amount: breakdown.rounded.amount(),
            spare_change: breakdown.spare_change.amount(),
            allocation: AllocationBody {
                donation: breakdown.donation.amount(),
                investment: breakdown.investment.amount(),
                savings: breakdown.savings.amount(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentHistoryEntry {
    pub id: Uuid,
    pub recipient_upi: Option<String>,
    pub recipient_phone: Option<String>,
    pub recipient_name: Option<String>,
    pub original_amount: Decimal,
    pub rounded_amount: Decimal,
    pub spare_change: Decimal,
    pub donation_amount: Decimal,
    pub investment_amount: Decimal,
    pub savings_amount: Decimal,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentRow> for PaymentHistoryEntry {
    fn from(row: PaymentRow) -> Self {
        Self {
            id: row.id,
            recipient_upi: row.recipient_upi,
            recipient_phone: row.recipient_phone,
            recipient_name: row.recipient_name,
            original_amount: row.original_amount,
            rounded_amount: row.rounded_amount,
            spare_change: row.spare_change,
            donation_amount: row.donation_amount,
            investment_amount: row.investment_amount,
            savings_amount: row.savings_amount,
            payment_status: row.payment_status,
            created_at: row.created_at,
        }
    }
}
