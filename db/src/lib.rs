pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

/// Connects using the configured URL. A value without a scheme is treated as
/// a SQLite file path.
pub async fn connect(database_url: &str) -> DatabaseConnection {
    let url = if database_url.starts_with("sqlite:")
        || database_url.starts_with("postgres://")
        || database_url.starts_with("mysql://")
    {
        database_url.to_owned()
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(database_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{database_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
