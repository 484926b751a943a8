use actix_web::{web, Responder};
use crate::server::model::response::HealthResponse;
use crate::server::state::AppState;
use crate::server::util::time;

/// liveness probe for the storefront pages
pub(crate) async fn get_health(data: web::Data<AppState>) -> impl Responder {
    web::Json(HealthResponse {
        success: true,
        message: "Order intake API is working!",
        timestamp: time::to_iso_millis(&time::helper::get_utc_now()),
        environment: data.env_name.clone(),
    })
}
