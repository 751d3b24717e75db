use serde::Deserialize;

use crate::services::generator::trim_topic;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
}

impl GenerateRequest {
    pub fn trimmed_topic(&self) -> &str {
        trim_topic(&self.topic)
    }
}
