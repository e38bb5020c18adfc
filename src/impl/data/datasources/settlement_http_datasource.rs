use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::{CriticalError, ServerError};

use crate::{
    config::SplitUpConfig,
    data::models::settlement_request_model::SettlementRequestModel,
    entities::Obligation,
    errors::{SettlementServerRejected, SettlementServerUnreachable},
};

#[async_trait]
pub(crate) trait SettlementDatasource: Send + Sync {
    /// Posts the obligations and returns the server's HTML report.
    async fn submit(&self, obligations: &[Obligation]) -> Result<String, ServerError>;
}

pub(crate) struct SettlementHttpDatasourceImpl {
    client: reqwest::Client,
    url: String,
}

impl SettlementHttpDatasourceImpl {
    pub(crate) fn new(config: &SplitUpConfig) -> Result<Self, ServerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CriticalError::with_debug("failed to build settlement HTTP client", &e))?;
        Ok(Self {
            client,
            url: config.settlement_url.clone(),
        })
    }
}

#[async_trait]
impl SettlementDatasource for SettlementHttpDatasourceImpl {
    async fn submit(&self, obligations: &[Obligation]) -> Result<String, ServerError> {
        let body = SettlementRequestModel::from(obligations);
        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SettlementServerUnreachable::with_debug(&self.url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SettlementServerRejected::new(&self.url, status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| SettlementServerUnreachable::with_debug(&self.url, &e))
    }
}
