use actix_web::{get, HttpResponse};

use crate::{errors::AppError, models::dto::response::MessageResponse};

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello from FastAPI Backend!"))
}

#[get("/api/hello")]
pub async fn api_hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello from the backend API!"))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Not Found".to_string()))
}
