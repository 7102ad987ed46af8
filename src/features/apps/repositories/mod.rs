mod app_repository;

pub use app_repository::AppsRepository;
