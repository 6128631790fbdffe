use std::sync::Arc;

use academy_backend::application::usecases::bootstrap::BootstrapUseCase;
use academy_backend::config::config_loader;
use academy_backend::infrastructure::axum_http::http_serve;
use academy_backend::infrastructure::postgres::postgres_connection;
use academy_backend::infrastructure::postgres::repositories::{
    admin_users::AdminUserPostgres, hero_content::HeroContentPostgres,
};
use academy_backend::observability::init_observability;
use anyhow::Result;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_observability()?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database.url)?;
    info!("Postgres connection has been established");

    postgres_connection::run_pending_migrations(&postgres_pool)?;
    info!("Database migrations are up to date");

    let db_pool = Arc::new(postgres_pool);

    let bootstrap_usecase = BootstrapUseCase::new(
        Arc::new(AdminUserPostgres::new(Arc::clone(&db_pool))),
        Arc::new(HeroContentPostgres::new(Arc::clone(&db_pool))),
    );
    bootstrap_usecase.run(&dotenvy_env.admin_auth).await?;
    info!("Database bootstrap has completed");

    http_serve::start(Arc::new(dotenvy_env), db_pool).await?;

    Ok(())
}
