mod app_service;

pub use app_service::AppsService;
