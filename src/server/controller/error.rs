use actix_web::{HttpResponse, ResponseError};
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use log::error;
use crate::server::model::response::ErrorResponse;
use crate::server::service::orders::OrderError;
use crate::server::service::validation::ValidationError;
use crate::server::store::StoreError;

#[derive(Debug, Display, Error)]
pub(crate) enum ApiError {
    #[display("{_0}")]
    Validation(ValidationError),
    #[display("{_0}")]
    Storage(StoreError),
    #[display("Invalid JSON data")]
    InvalidJson,
    #[display("Method not allowed")]
    MethodNotAllowed,
    #[display("API endpoint not found")]
    NotFound,
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Invalid(e) => ApiError::Validation(e),
            OrderError::Store(e) => ApiError::Storage(e),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Storage(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::Validation(_) | ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(e) = self {
            error!("order storage failed, {}", e);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
        })
    }
}
