pub mod config;
pub mod row;

pub use config::{AppConfig, SeedLists, TableConfig, UiConfig};
pub use row::{Field, Row};
