pub mod apps;
pub mod factors;
