//! route table
//!
//! Built with resources instead of route macros: each order path needs its own
//! 405 default and the same handlers are mounted under two prefixes.

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;
use crate::server::controller::error::ApiError;
use crate::server::controller::health::get_health;
use crate::server::controller::orders::{delete_orders, get_orders, post_order};

/// Order resource paths; the storefront pages call the `/api` one.
const ORDER_PATHS: [&str; 2] = ["/orders", "/api/orders"];
const HEALTH_PATH: &str = "/api/test";

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| {
            warn!("unreadable order payload, {}", err);
            ApiError::InvalidJson.into()
        }),
    );
    for path in ORDER_PATHS {
        cfg.service(
            web::resource(path)
                .route(web::get().to(get_orders))
                .route(web::post().to(post_order))
                .route(web::delete().to(delete_orders))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        );
    }
    cfg.service(
        web::resource(HEALTH_PATH)
            .route(web::get().to(get_health))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
    cfg.default_service(web::to(fallback));
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

/// Preflight is acknowledged on any path; everything else is unknown.
async fn fallback(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if *req.method() == Method::OPTIONS {
        return Ok(preflight().await);
    }
    Err(ApiError::NotFound)
}
