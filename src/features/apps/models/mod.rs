mod app;
mod enums;

pub use app::{is_stale, AppFactorRow, AppRow, AppWithFactors};
pub use enums::{AppStore, BusinessModel, DrugRating};
