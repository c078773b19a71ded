use migration::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::{env, fs, path::Path};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    // Bare paths are treated as SQLite files; make sure the directory exists.
    let url = if database_url.contains("://") || database_url.starts_with("sqlite:") {
        database_url
    } else {
        if let Some(parent) = Path::new(&database_url).parent() {
            fs::create_dir_all(parent).expect("Failed to create DB directory");
        }
        format!("sqlite://{database_url}?mode=rwc")
    };

    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None).await.expect("Migration failed");

    println!("Migrations applied to {url}");
}
