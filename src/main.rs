mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::database::{MongoDB, MongoScoreRepository, MongoUserRepository};
use crate::services::{CredentialStore, ScoreLedger};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("🚀 Starting Student Portal...");

    // Initialize MongoDB connection
    let db = MongoDB::connect(&config.mongodb_uri, &config.database_name)
        .await
        .map_err(|e| {
            log::error!("❌ Error connecting to MongoDB: {}", e);
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
        })?;

    log::info!("✅ MongoDB connected successfully");

    let credential_store = web::Data::new(CredentialStore::new(Arc::new(
        MongoUserRepository::new(&db),
    )));
    let score_ledger = web::Data::new(ScoreLedger::new(Arc::new(MongoScoreRepository::new(
        &db,
    ))));

    let (host, port) = config.bind_address();
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    let openapi = api::swagger::ApiDoc::openapi();

    // Start HTTP server
    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(credential_store.clone())
            .app_data(score_ledger.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(api::configure)
    })
    .bind((host, port))?
    .run();

    let result = server.await;

    log::info!("🛑 Server stopped, closing MongoDB connection");
    db.shutdown().await;

    result
}
