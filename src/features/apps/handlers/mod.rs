pub mod app_handler;

pub use app_handler::{create_app, delete_app, get_app, list_apps, update_app};
