use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn config_from_env() -> AppConfig {
    let mut cfg = AppConfig { database: DatabaseConfig::from_env(), ..AppConfig::default() };
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    cfg
}

/// Config from the file at `path`, or from `SERVER_HOST`/`SERVER_PORT`/`DATABASE_URL` when
/// that file cannot be read. A file that is present but malformed or invalid stops startup.
fn load_config_from(path: &str) -> Result<AppConfig, StartupError> {
    let invalid = |e: anyhow::Error| StartupError::InvalidConfig(format!("{}: {}", path, e));
    let mut cfg = match configs::load_optional(path).map_err(invalid)? {
        Some(cfg) => cfg,
        None => {
            warn!(path, "config file not readable; using environment");
            config_from_env()
        }
    };
    cfg.normalize_and_validate().map_err(invalid)?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config_from(&configs::config_path())?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    }

    let state = ServerState::with_database(db);
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting online shop server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("online-shop-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn invalid_file_stops_startup() {
        let path = write_config("bad-url", "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[database]\nurl = \"mysql://prod/shop\"\n");
        let res = load_config_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        match res {
            Err(StartupError::InvalidConfig(msg)) => assert!(msg.contains("postgres"), "{}", msg),
            other => panic!("expected InvalidConfig, got {:?}", other.map(|c| c.server.port)),
        }
    }

    #[test]
    fn malformed_file_stops_startup() {
        let path = write_config("malformed", "[server\nport = ");
        let res = load_config_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(matches!(res, Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn valid_file_is_used_as_is() {
        let path = write_config(
            "valid",
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[database]\nurl = \"postgres://shop:shop@db:5432/shop\"\n",
        );
        let res = load_config_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let cfg = res.unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.url, "postgres://shop:shop@db:5432/shop");
    }
}
