#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::GenerateRequest;

    /// A request for `topic` exactly as given, whitespace included.
    pub fn generate_request(topic: &str) -> GenerateRequest {
        GenerateRequest {
            topic: topic.to_string(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_generate_request() {
        let request = generate_request("  Rust ");
        assert_eq!(request.topic, "  Rust ");
        assert_eq!(request.trimmed_topic(), "Rust");
    }
}
