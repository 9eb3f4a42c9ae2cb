use std::sync::Arc;
use std::time::Duration;

use code_explainer::rate_limit::RateLimiter;
use code_explainer::service::ExplainService;
use code_explainer::{app, config, consts};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Code Explainer service...");

    let config = config::load_config().expect("Failed to load config");

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(consts::READ_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client");

    let explain_service = Arc::new(ExplainService::with_gemini(http_client, &config));
    let limiter = Arc::new(RateLimiter::with_defaults());
    let config = Arc::new(config);

    let port = config.port;
    let app_factory =
        move || app::create_app(explain_service.clone(), limiter.clone(), config.clone());

    log::info!("Server running on port {}", port);
    actix_web::HttpServer::new(app_factory)
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
