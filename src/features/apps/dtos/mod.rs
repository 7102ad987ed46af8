mod app_dto;

pub use app_dto::{
    AppResponseDto, CreateAppDto, FactorDto, FactorPresenceDto, ListAppsQuery, UpdateAppDto,
};
