use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::factors::models::FactorDefinition;

/// Response DTO for a factor definition
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FactorDefinitionDto {
    pub name: String,
    pub description: String,
}

impl From<FactorDefinition> for FactorDefinitionDto {
    fn from(d: FactorDefinition) -> Self {
        Self {
            name: d.name,
            description: d.description,
        }
    }
}
