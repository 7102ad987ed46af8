use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::factors::dtos::FactorDefinitionDto;
use crate::features::factors::models::FactorDefinition;

/// Service for the read-only factor reference catalog
pub struct FactorsService {
    pool: PgPool,
}

impl FactorsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all factor definitions
    pub async fn list(&self) -> Result<Vec<FactorDefinitionDto>> {
        let definitions = sqlx::query_as::<_, FactorDefinition>(
            "SELECT name, description FROM factor_definitions ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list factor definitions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(definitions.into_iter().map(|d| d.into()).collect())
    }
}
