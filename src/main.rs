use actix_web::{middleware::Logger, web, App, HttpServer};
use study_packet_server::{
    app_state::AppState, config::Config, middleware::RequestIdMiddleware, router,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = web::Data::new(AppState::new(Config::from_env()).await);
    let bind = (
        state.config.web_server_host.clone(),
        state.config.web_server_port,
    );

    log::info!("starting HTTP server on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(router::cors())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(router::configure)
    })
    .bind(bind)?
    .run()
    .await
}
