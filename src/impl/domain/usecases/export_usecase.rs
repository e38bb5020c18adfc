use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    data::repositories::obligations_repository_impl::ObligationsRepositoryImpl,
    domain::{logic::session::Session, repositories::obligations_repository::ObligationsRepository},
    errors::SplitUpError,
};

#[async_trait]
pub trait ExportUsecase: Send + Sync {
    async fn export_string(&self) -> Result<String, SplitUpError>;

    async fn export_to_file<P>(&self, path: P) -> Result<(), SplitUpError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ExportUsecaseImpl<R = ObligationsRepositoryImpl>
where
    R: ObligationsRepository,
{
    session: Arc<Mutex<Session>>,
    repository: Arc<R>,
}

impl<R: ObligationsRepository> ExportUsecaseImpl<R> {
    pub(crate) fn new(session: Arc<Mutex<Session>>, repository: Arc<R>) -> Self {
        Self {
            session,
            repository,
        }
    }
}

fn export_failed(e: impl std::fmt::Display) -> SplitUpError {
    SplitUpError::ExportFailed {
        details: e.to_string(),
    }
}

#[async_trait]
impl<R: ObligationsRepository> ExportUsecase for ExportUsecaseImpl<R> {
    async fn export_string(&self) -> Result<String, SplitUpError> {
        let session = self.session.lock().await;
        if session.ledger().is_empty() {
            return Err(SplitUpError::EmptyLedger);
        }
        self.repository
            .export(session.obligations())
            .map_err(export_failed)
    }

    async fn export_to_file<P>(&self, path: P) -> Result<(), SplitUpError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let obligations = self.session.lock().await.obligations().to_vec();
        if obligations.is_empty() {
            return Err(SplitUpError::EmptyLedger);
        }
        self.repository
            .export_to_file(path, &obligations)
            .await
            .map_err(export_failed)?;
        tracing::info!(count = obligations.len(), "ledger exported");
        Ok(())
    }
}
