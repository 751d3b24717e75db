use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

/// Database diagnostics. Always answers 200; failures are reported as text.
#[get("/test")]
pub async fn test_database(state: web::Data<AppState>) -> HttpResponse {
    let report = state.diagnostics_service.report().await;
    HttpResponse::Ok().json(report)
}
