use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::GenerateRequest,
};

#[post("/api/generate")]
pub async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let packet = state.generation_service.generate(&request).map_err(|err| {
        log::info!(
            "generate rejected request_id={}: {err}",
            get_request_id(&req).unwrap_or_default()
        );
        err
    })?;
    Ok(HttpResponse::Ok().json(packet))
}
