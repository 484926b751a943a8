use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::{Map, Value};
use crate::server::controller::error::ApiError;
use crate::server::model::response::{ListOrdersResponse, MessageResponse, SubmitOrderResponse};
use crate::server::state::AppState;

/// list orders, newest first
pub(crate) async fn get_orders(data: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let orders = match data.orders.list().await {
        Ok(orders) => orders,
        Err(e) if data.strict_reads => return Err(e.into()),
        Err(e) => {
            error!("failed to read orders, serving an empty list, {}", e);
            vec![]
        }
    };
    Ok(web::Json(ListOrdersResponse::new(orders)))
}

/// submit a new order
pub(crate) async fn post_order(
    body: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let order = data.orders.append(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(SubmitOrderResponse {
        success: true,
        message: "Order submitted successfully",
        order,
    }))
}

/// clear every order
pub(crate) async fn delete_orders(data: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    data.orders.clear().await?;
    Ok(web::Json(MessageResponse {
        success: true,
        message: "All orders cleared successfully",
    }))
}
