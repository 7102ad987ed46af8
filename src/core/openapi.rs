use utoipa::{Modify, OpenApi};

use crate::features::apps::{dtos as apps_dtos, handlers as apps_handlers, models as apps_models};
use crate::features::factors::{dtos as factors_dtos, handlers as factors_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Apps
        apps_handlers::app_handler::list_apps,
        apps_handlers::app_handler::get_app,
        apps_handlers::app_handler::create_app,
        apps_handlers::app_handler::update_app,
        apps_handlers::app_handler::delete_app,
        // Factors (reference catalog)
        factors_handlers::list_factors,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Apps
            apps_models::AppStore,
            apps_models::DrugRating,
            apps_models::BusinessModel,
            apps_dtos::AppResponseDto,
            apps_dtos::CreateAppDto,
            apps_dtos::UpdateAppDto,
            apps_dtos::FactorDto,
            apps_dtos::FactorPresenceDto,
            ApiResponse<apps_dtos::AppResponseDto>,
            ApiResponse<Vec<apps_dtos::AppResponseDto>>,
            // Factors
            factors_dtos::FactorDefinitionDto,
            ApiResponse<Vec<factors_dtos::FactorDefinitionDto>>,
        )
    ),
    tags(
        (name = "apps", description = "App catalog CRUD"),
        (name = "factors", description = "Factor reference catalog")
    )
)]
pub struct ApiDoc;

/// Injects runtime-configured title/version/description into the generated doc
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
