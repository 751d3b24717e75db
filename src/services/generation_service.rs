use crate::{
    errors::{AppError, AppResult},
    models::{domain::GenerationResult, dto::request::GenerateRequest},
    services::generator,
};

pub const TOPIC_REQUIRED: &str = "Topic is required";

#[derive(Debug, Default)]
pub struct GenerationService;

impl GenerationService {
    pub fn new() -> Self {
        Self
    }

    /// Rejects blank topics before the generator sees them.
    pub fn generate(&self, request: &GenerateRequest) -> AppResult<GenerationResult> {
        let topic = request.trimmed_topic();
        if topic.is_empty() {
            log::warn!("rejected generate request with a blank topic");
            return Err(AppError::InvalidArgument(TOPIC_REQUIRED.to_string()));
        }

        log::info!("generating study packet for topic {topic:?}");
        Ok(generator::generate(topic))
    }
}
