use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use libris_api::app::{create_app, AppState};
use libris_core::repositories::{BookRepository, HealthCheck, TokenRepository, UserRepository};
use libris_infra::{
    DatabasePool, MemoryBookRepository, MemoryHealth, MemoryTokenRepository, MemoryUserRepository,
    MySqlBookRepository, MySqlTokenRepository, MySqlUserRepository,
};
use libris_shared::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting Libris API Server ({})", config.environment);

    if config.auth.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    match config.database.storage {
        StorageBackend::Mysql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("connecting to MySQL")?;
            pool.run_migrations().await.context("running migrations")?;

            let state = AppState::new(
                MySqlUserRepository::new(pool.get_pool().clone()),
                MySqlTokenRepository::new(pool.get_pool().clone()),
                MySqlBookRepository::new(pool.get_pool().clone()),
                Arc::new(pool.clone()),
                &config.auth,
            );
            let served = serve(&config, state).await;
            pool.close().await;
            served
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            let state = AppState::new(
                MemoryUserRepository::new(),
                MemoryTokenRepository::new(),
                MemoryBookRepository::new(),
                Arc::new(MemoryHealth) as Arc<dyn HealthCheck>,
                &config.auth,
            );
            serve(&config, state).await
        }
    }
}

async fn serve<U, T, B>(config: &AppConfig, state: AppState<U, T, B>) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let state = web::Data::new(state);
    let cors = config.cors.clone();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding {}", bind_address))?
        .run()
        .await
        .context("running HTTP server")
}
