use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Obligation;

#[async_trait]
pub trait ObligationsRepository: Send + Sync {
    fn parse(&self, filename: &str, contents: &str) -> Result<Vec<Obligation>, ServerError>;

    async fn read_file<P>(&self, path: P) -> Result<Vec<Obligation>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn export(&self, obligations: &[Obligation]) -> Result<String, ServerError>;

    async fn export_to_file<P>(&self, path: P, obligations: &[Obligation]) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn submit(&self, obligations: &[Obligation]) -> Result<String, ServerError>;
}
