use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse};

use crate::config::Config;
use crate::errors::ExplainerError;
use crate::models::request::ExplainRequest;
use crate::models::response::{
    EndpointMap, ErrorResponse, ExplainResponse, HealthResponse, NotFoundResponse, ServiceInfo,
};
use crate::rate_limit::RateLimiter;
use crate::service::ExplainService;

fn client_identity(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| match addr.parse::<std::net::SocketAddr>() {
            // Peer addresses carry a port; forwarded-header values are bare
            // IPs and must stay whole, colons and all.
            Ok(socket) => socket.ip().to_string(),
            Err(_) => addr.to_string(),
        })
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn explain(
    req: HttpRequest,
    service: Data<ExplainService>,
    limiter: Data<RateLimiter>,
    request: Json<ExplainRequest>,
) -> impl actix_web::Responder {
    let identity = client_identity(&req);
    if let Err(e) = limiter.check(&identity) {
        log::info!("rate limit exceeded for {}", identity);
        let message = match e {
            ExplainerError::RateLimitError(msg) => msg,
            other => other.to_string(),
        };
        return HttpResponse::TooManyRequests().json(ErrorResponse {
            error: message,
            details: None,
        });
    }

    log::debug!("explain request: {:?}", request.0);

    match service.explain(request.0).await {
        Ok(result) => HttpResponse::Ok().json(ExplainResponse {
            success: true,
            explanation: result.explanation,
            model: result.model,
        }),
        Err(ExplainerError::ValidationError(msg)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: msg,
            details: None,
        }),
        Err(e) => {
            log::error!("explain error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate explanation".to_string(),
                details: Some(e.to_string()),
            })
        }
    }
}

pub async fn health(config: Data<Config>) -> impl actix_web::Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        env: config.environment.as_str().to_string(),
    })
}

pub async fn index() -> impl actix_web::Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "Code Explainer API Server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            health: "/api/health".to_string(),
            explain: "/api/explain".to_string(),
        },
    })
}

pub async fn not_found(req: HttpRequest) -> impl actix_web::Responder {
    HttpResponse::NotFound().json(NotFoundResponse {
        error: "Route not found".to_string(),
        path: req.path().to_string(),
        method: req.method().to_string(),
    })
}
