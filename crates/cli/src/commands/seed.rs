//! Database seeding command.
//!
//! Inserts the same sample rows the server inserts at startup: three
//! products and one shift task. Without `--force` the command is a no-op
//! when products already exist.

use secrecy::SecretString;

use barback_server::{db, seed};

/// Seed the database with sample data.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or an insert fails.
pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("BARBACK_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "BARBACK_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    tracing::info!("Connected to database");

    if force {
        seed::seed(&pool).await?;
    } else if !seed::seed_if_empty(&pool).await? {
        tracing::info!("Products already present; use --force to seed anyway");
    }

    Ok(())
}
