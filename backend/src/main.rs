//! Backend entry-point: loads settings, prepares storage, and serves the
//! trivia REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_blocking};
use backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(url) => {
            if settings.run_migrations {
                let applied = run_pending_migrations_blocking(url.to_owned())
                    .await
                    .map_err(io::Error::other)?;
                info!(applied, "database migrations applied");
            }
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_size()))
                .await
                .map_err(io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => {
            if settings.run_migrations {
                warn!("run_migrations ignored without a database url");
            }
            warn!("no database url configured; questions are kept in memory");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %bind_addr, "starting trivia backend");
    create_server(health_state, config)?.await
}
