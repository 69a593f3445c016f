use calin_db::{schema::initialize_database, seed::seed_database};
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;

    info!("Connecting to database...");
    let db_pool = calin_db::create_pool(&database_url).await?;

    // Seeding expects the tables to exist
    initialize_database(&db_pool).await?;
    seed_database(&db_pool).await?;

    Ok(())
}
