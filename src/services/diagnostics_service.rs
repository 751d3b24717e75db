use std::{sync::Arc, time::Duration};

use crate::{
    db::{ConnectivityError, DatabaseProbe},
    models::dto::response::DiagnosticsReport,
};

pub const MAX_ERROR_CHARS: usize = 50;
pub const MAX_COLLECTIONS: usize = 10;

const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";

pub struct DiagnosticsService {
    probe: Option<Arc<dyn DatabaseProbe>>,
    init_error: Option<String>,
    database_url_set: bool,
    database_name_set: bool,
    timeout: Duration,
}

impl DiagnosticsService {
    pub fn new(
        probe: Option<Arc<dyn DatabaseProbe>>,
        database_url_set: bool,
        database_name_set: bool,
        timeout: Duration,
    ) -> Self {
        Self {
            probe,
            init_error: None,
            database_url_set,
            database_name_set,
            timeout,
        }
    }

    /// Records why the database could not be set up at startup.
    pub fn with_init_error(mut self, err: &ConnectivityError) -> Self {
        self.init_error = Some(err.to_string());
        self
    }

    /// Never fails: every problem is folded into the report's status text.
    pub async fn report(&self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: presence(self.database_url_set).to_string(),
            database_name: presence(self.database_name_set).to_string(),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        if let Some(err) = self.init_error.as_deref() {
            report.database = format!("❌ Error: {}", truncate(err));
            return report;
        }

        let Some(probe) = self.probe.as_ref() else {
            report.database =
                "❌ Database integration not configured (set DATABASE_URL)".to_string();
            return report;
        };

        if !probe.is_available() {
            report.database = "⚠️  Available but not initialized".to_string();
            return report;
        }

        report.database = "✅ Available".to_string();
        report.connection_status = "Connected".to_string();

        match self.list_collections(&**probe).await {
            Ok(names) => {
                report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
                report.database = "✅ Connected & Working".to_string();
            }
            Err(err) => {
                log::warn!(
                    "database probe for {} failed: {err}",
                    probe.name().unwrap_or_default()
                );
                report.database = format!("⚠️  Connected but Error: {}", truncate(&err.to_string()));
            }
        }

        report
    }

    async fn list_collections(
        &self,
        probe: &dyn DatabaseProbe,
    ) -> Result<Vec<String>, ConnectivityError> {
        tokio::time::timeout(self.timeout, probe.list_collection_names())
            .await
            .map_err(|_| ConnectivityError::Timeout(self.timeout))?
    }
}

fn presence(set: bool) -> &'static str {
    if set {
        SET
    } else {
        NOT_SET
    }
}

/// First [`MAX_ERROR_CHARS`] characters, never splitting a code point.
fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
