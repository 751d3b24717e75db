use std::sync::Arc;

use crate::{
    config::Config,
    db::{Database, DatabaseProbe},
    services::{diagnostics_service::DiagnosticsService, generation_service::GenerationService},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub diagnostics_service: Arc<DiagnosticsService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Connects the optional database probe described by `config`. An unusable
    /// `DATABASE_URL` is kept for the diagnostics report instead of failing.
    pub async fn new(config: Config) -> Self {
        match Database::from_config(&config).await {
            Ok(db) => {
                let probe = db.map(|db| Arc::new(db) as Arc<dyn DatabaseProbe>);
                Self::with_probe(config, probe)
            }
            Err(err) => {
                log::warn!("DATABASE_URL is set but unusable, diagnostics disabled: {err}");
                let diagnostics = diagnostics_service(&config, None).with_init_error(&err);
                Self::from_parts(config, diagnostics)
            }
        }
    }

    pub fn with_probe(config: Config, probe: Option<Arc<dyn DatabaseProbe>>) -> Self {
        let diagnostics = diagnostics_service(&config, probe);
        Self::from_parts(config, diagnostics)
    }

    fn from_parts(config: Config, diagnostics_service: DiagnosticsService) -> Self {
        Self {
            generation_service: Arc::new(GenerationService::new()),
            diagnostics_service: Arc::new(diagnostics_service),
            config: Arc::new(config),
        }
    }
}

fn diagnostics_service(
    config: &Config,
    probe: Option<Arc<dyn DatabaseProbe>>,
) -> DiagnosticsService {
    DiagnosticsService::new(
        probe,
        config.database_url_set(),
        config.database_name_set(),
        config.db_probe_timeout,
    )
}
