//! Wallet DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use infra_db::repositories::account::WalletSnapshotRow;

#[derive(Debug, Serialize)]
pub struct WalletResponse {
    pub spendable_balance: Decimal,
    pub donation_wallet: Decimal,
    pub investment_wallet: Decimal,
    pub savings_wallet: Decimal,
    pub total_spare_change: Decimal,
    pub donation_percentage: i32,
    pub investment_percentage: i32,
    pub savings_percentage: i32,
}

impl From<WalletSnapshotRow> for WalletResponse {
    fn from(row: WalletSnapshotRow) -> Self {
        Self {
            spendable_balance: row.spendable_balance,
            donation_wallet: row.donation_wallet,
            investment_wallet: row.investment_wallet,
            savings_wallet: row.savings_wallet,
            total_spare_change: row.total_spare_change,
            donation_percentage: row.donation_percentage,
            investment_percentage: row.investment_percentage,
            savings_percentage: row.savings_percentage,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SplitRequest {
    pub donation: u32,
    pub investment: u32,
    pub savings: u32,
}
