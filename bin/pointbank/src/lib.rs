pub mod utility;

pub use pointbank_primitives::error::ApiError;

use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use eyre::Report;
use pointbank_core::app_state::AppState;
use pointbank_primitives::config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // Env first, then logging, so configuration problems are visible.
    let _ = dotenvy::dotenv();
    setup_logging();

    info!("Starting pointbank...");

    let config = AppConfig::from_env()?;
    let pool = create_db_pool()?;
    let state = AppState::new(pool, config);

    let app = pointbank_api::app::create_router(state);
    serve(app).await?;

    info!("pointbank shut down gracefully");
    Ok(())
}
