use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::apps::dtos::{AppResponseDto, CreateAppDto, UpdateAppDto};
use crate::features::apps::repositories::AppsRepository;

/// Business layer for the app catalog.
///
/// Deliberately thin: each operation delegates to the repository, adding
/// only the existence check on `get` and the row-to-DTO mapping.
pub struct AppsService {
    repository: AppsRepository,
}

impl AppsService {
    pub fn new(repository: AppsRepository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<AppResponseDto>> {
        let now = Utc::now();
        let apps = self.repository.list(search).await?;
        Ok(apps
            .into_iter()
            .map(|a| AppResponseDto::from_model(a, now))
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<AppResponseDto> {
        let app = self.repository.get(id).await?;
        app.map(|a| AppResponseDto::from_model(a, Utc::now()))
            .ok_or_else(|| AppError::NotFound(format!("App '{}' not found", id)))
    }

    pub async fn create(&self, dto: CreateAppDto) -> Result<AppResponseDto> {
        let app = self.repository.create(&dto).await?;
        Ok(AppResponseDto::from_model(app, Utc::now()))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateAppDto) -> Result<()> {
        self.repository.update(id, &dto).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id).await
    }
}
