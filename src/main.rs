mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod routes;
mod utils;

use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{web, App, HttpServer};
use config::Config;
use db::postgres::PgStore;
use db::Store;
use dotenv::dotenv;
use errors::StartupError;
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    // Initialize the database pool and bring the schema up to date
    let pool = db::create_pool(&config).await?;
    db::run_migrations(&pool).await?;

    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool.clone()));
    let store = web::Data::from(store);

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}
