use crate::auth::jwt::{JwtConfig, JwtService};
use crate::schemas::AppState;
use anyhow::Result;
use sea_orm::Database;

/// Initialize application configuration and state
pub async fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://orderd.db".to_string());

    // Connect to database
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(&database_url).await?;

    // Token signing configuration
    let jwt = JwtService::new(JwtConfig::from_env());

    Ok(AppState { db, jwt })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
