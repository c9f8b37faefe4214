use actix_web::{App, HttpServer, middleware, web};

use eventdash::config::AppConfig;
use eventdash::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_path = dotenvy::dotenv().ok();
    env_logger::init();
    if let Some(path) = dotenv_path {
        log::info!("Loaded environment from {}", path.display());
    }

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        log::error!("Configuration error: {e}");
        std::process::exit(1);
    });

    if config.bootstrap_schema {
        if let Err(e) = db::run_migrations(&config.store).await {
            log::error!("Schema bootstrap failed: {e}");
            std::process::exit(1);
        }
    }

    log::info!(
        "Using store {}@{}:{}/{}",
        config.store.user,
        config.store.host,
        config.store.port,
        config.store.database
    );
    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
