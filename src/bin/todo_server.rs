//! HTTP entry point for the todo service.
//!
//! Reads `DATABASE_URL` (required) and `PORT` (optional, default 3000)
//! from the environment, then serves the todo REST API backed by
//! `PostgreSQL`.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::env;
use std::net::Ipv4Addr;
use std::sync::Arc;
use todoapp::todo::{
    adapters::{postgres::PostgresTodoRepository, rest},
    services::TodoLifecycleService,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = env::var("DATABASE_URL")?;
    let port = match env::var("PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().build(manager)?;
    let repository = Arc::new(PostgresTodoRepository::new(pool, Arc::new(DefaultClock)));
    let service = Arc::new(TodoLifecycleService::new(repository));

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
    tracing::info!(port, "todo service listening");
    axum::serve(listener, rest::router(service)).await?;
    Ok(())
}
