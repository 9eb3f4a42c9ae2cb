use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{config, handlers, rate_limit, service};

pub fn create_app(
    explain_service: Arc<service::ExplainService>,
    limiter: Arc<rate_limit::RateLimiter>,
    config: Arc<config::Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600);
    for origin in config.allowed_origins() {
        cors = cors.allowed_origin(origin);
    }

    App::new()
        .wrap(Logger::default())
        .wrap(cors)
        .app_data(Data::from(explain_service))
        .app_data(Data::from(limiter))
        .app_data(Data::from(config))
        .route("/", web::get().to(handlers::index))
        .service(
            web::scope("/api")
                .route("/explain", web::post().to(handlers::explain))
                .route("/health", web::get().to(handlers::health)),
        )
        .default_service(web::route().to(handlers::not_found))
}
