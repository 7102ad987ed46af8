use sqlx::FromRow;

/// Database model for one canonical factor definition
#[derive(Debug, Clone, FromRow)]
pub struct FactorDefinition {
    pub name: String,
    pub description: String,
}
