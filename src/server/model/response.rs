use serde::Serialize;
use crate::server::model::order::{Order, OrderSummary};

#[derive(Debug, Serialize)]
pub(crate) struct ListOrdersResponse {
    pub success: bool,
    pub orders: Vec<Order>,
    pub total: usize,
}

impl ListOrdersResponse {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            success: true,
            total: orders.len(),
            orders,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitOrderResponse {
    pub success: bool,
    pub message: &'static str,
    pub order: OrderSummary,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub environment: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
