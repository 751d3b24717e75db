//! Route table and the cross-cutting pieces every worker's `App` shares.

use actix_cors::Cors;
use actix_web::web;

use crate::{errors::AppError, handlers, middleware::REQUEST_ID_HEADER};

/// Registers every endpoint plus the JSON 404 fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(handlers::root)
        .service(handlers::api_hello)
        .service(handlers::health_check)
        .service(handlers::generate)
        .service(handlers::test_database)
        .default_service(web::to(handlers::not_found));
}

/// Body decoding failures become 422 with a `detail` message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("rejected request body: {err}");
        AppError::from(err).into()
    })
}

/// Open to every origin, method and header, with credentials. The request id
/// header is readable by browser clients.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers([REQUEST_ID_HEADER])
        .supports_credentials()
}
