use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::SplitUpConfig,
    data::datasources::{
        obligations_csv_datasource::{ObligationsCsvDatasource, ObligationsCsvDatasourceImpl},
        settlement_http_datasource::{SettlementDatasource, SettlementHttpDatasourceImpl},
    },
    domain::repositories::obligations_repository::ObligationsRepository,
    entities::Obligation,
};

pub(crate) struct ObligationsRepositoryImpl<
    DS1 = ObligationsCsvDatasourceImpl, // Default.
    DS2 = SettlementHttpDatasourceImpl, // Default.
> where
    DS1: ObligationsCsvDatasource,
    DS2: SettlementDatasource,
{
    csv_datasource: DS1,
    settlement_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> ObligationsRepository for ObligationsRepositoryImpl<DS1, DS2>
where
    DS1: ObligationsCsvDatasource,
    DS2: SettlementDatasource,
{
    fn parse(&self, filename: &str, contents: &str) -> Result<Vec<Obligation>, ServerError> {
        self.csv_datasource.from_string(filename, contents)
    }

    async fn read_file<P>(&self, path: P) -> Result<Vec<Obligation>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.csv_datasource.from_file(path).await
    }

    fn export(&self, obligations: &[Obligation]) -> Result<String, ServerError> {
        self.csv_datasource.to_string(obligations)
    }

    async fn export_to_file<P>(&self, path: P, obligations: &[Obligation]) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.csv_datasource.to_file(path, obligations).await
    }

    async fn submit(&self, obligations: &[Obligation]) -> Result<String, ServerError> {
        self.settlement_datasource.submit(obligations).await
    }
}

impl ObligationsRepositoryImpl {
    pub(crate) fn new(config: &SplitUpConfig) -> Result<Self, ServerError> {
        Ok(ObligationsRepositoryImpl {
            csv_datasource: ObligationsCsvDatasourceImpl::new(),
            settlement_datasource: SettlementHttpDatasourceImpl::new(config)?,
        })
    }
}
