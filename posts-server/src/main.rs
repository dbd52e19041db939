use std::sync::Arc;

use anyhow::Result;

mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use data::repositories::postgres::post_repository::PostgresPostRepository;
use infrastructure::database::create_pool;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;

    let state = AppState::new(Arc::new(PostgresPostRepository::new(pool)));

    server::run_http(&settings, state).await
}
