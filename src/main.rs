use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use compass_server::{app_state::AppState, catalog::catalog, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    log::info!(
        "attribute catalog loaded with {} attributes",
        catalog().len()
    );

    let state = match AppState::new(config.clone()).await {
        Ok(state) => state,
        Err(err) => {
            log::error!("failed to initialize application state: {}", err);
            std::process::exit(1);
        }
    };

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.cors_allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::health_check_live)
            .service(handlers::open_survey)
            .service(handlers::submit_base_answers)
            .service(handlers::submit_score)
            .service(handlers::submit_conditional_answers)
            .service(handlers::navigate)
    })
    .bind((host, port))?
    .run()
    .await
}
