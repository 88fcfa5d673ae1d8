//! Charity catalog repository
//!
//! The charity catalog is reference data: seeded by migration, read-only at
//! runtime. Donations resolve their target here by id or by exact name.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::CharityId;

use crate::error::{DatabaseError, LedgerError};

/// How a donation request identifies its target charity
#[derive(Debug, Clone)]
pub enum CharityRef {
    Id(CharityId),
    Name(String),
}

/// Repository for charity reference data
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all charities ordered by name
    pub async fn list_charities(&self) -> Result<Vec<CharityRow>, LedgerError> {
        let rows = sqlx::query_as::<_, CharityRow>(
            r#"
            SELECT id, name, category, location, verified, rating, description,
                   trust_score, transparency_score, impact, efficiency_score
            FROM charities
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Finds a charity by id or exact name
    pub async fn find_charity(&self, charity: &CharityRef) -> Result<CharityRow, LedgerError> {
        let row = match charity {
            CharityRef::Id(id) => sqlx::query_as::<_, CharityRow>(
                r#"
                SELECT id, name, category, location, verified, rating, description,
                       trust_score, transparency_score, impact, efficiency_score
                FROM charities
                WHERE id = $1
                "#,
            )
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Charity", id))?,
            CharityRef::Name(name) => sqlx::query_as::<_, CharityRow>(
                r#"
                SELECT id, name, category, location, verified, rating, description,
                       trust_score, transparency_score, impact, efficiency_score
                FROM charities
                WHERE name = $1
                "#,
            )
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Charity", name))?,
        };

        Ok(row)
    }
}

/// Database row for a charity
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CharityRow {
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
