//! Call-through to the third-party reporting API
//!
//! Single attempt, no retry; failures surface directly to the caller.

use crate::config::AnalyticsConfig;
use crate::error::{Error, Result};

/// Thin client over the external reporting API
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: reqwest::Client,
    config: Option<AnalyticsConfig>,
}

impl AnalyticsClient {
    pub fn new(config: Option<AnalyticsConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch a named report, passing the query string through verbatim
    pub async fn fetch_report(
        &self,
        report: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| Error::Config("Analytics provider is not configured".to_string()))?;

        let url = format!("{}/reports/{}", config.base_url.trim_end_matches('/'), report);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&config.api_key)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
