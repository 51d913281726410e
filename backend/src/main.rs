mod classifier;
mod config;
mod knowledge;
mod pipeline;
mod routes;
mod state;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::Config;
use routes::configure_routes;
use state::AppState;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Configuration error: {}", e),
            ));
        }
    };
    log::info!(
        "Model: {} ({:?}), labels: {}, image size: {}, threshold: {}",
        config.model_path.display(),
        config.model_format(),
        config
            .labels_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".to_string()),
        config.image_size,
        config.confidence_threshold
    );

    let bind_address = config.bind_address();
    let state = web::Data::new(AppState::new(config));

    // The server still starts without a model so the health check answers;
    // prediction endpoints retry the load on demand.
    match state.predictor().await {
        Ok(predictor) => log::info!(
            "Model loaded successfully, {} classes, confidence threshold {}",
            predictor.labels().len(),
            predictor.threshold()
        ),
        Err(e) => {
            log::error!("Failed to load model: {}", e);
            log::error!("Check MODEL_PATH and that the model file exists");
        }
    }

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
