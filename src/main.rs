mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::Config;
use crate::errors::StartupError;
use crate::repositories::PgUserRepository;
use crate::services::UserService;

/// Load configuration, open the pool and run the auto-migration.
async fn bootstrap() -> Result<(Config, UserService), StartupError> {
    let config = Config::from_env()?;

    let pool = repositories::connect(&config.database).await?;
    info!("Connected to PostgreSQL successfully!");

    let repository = PgUserRepository::new(pool);
    repository
        .migrate()
        .await
        .map_err(StartupError::Migration)?;

    Ok((config, UserService::new(Arc::new(repository))))
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let (config, user_service) = bootstrap().await.inspect_err(|e| error!("{}", e))?;
    let user_service = web::Data::new(user_service);

    // Start HTTP server
    let server_addr = config.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
