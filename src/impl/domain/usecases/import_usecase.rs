use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::Mutex;

use crate::{
    data::{
        datasources::obligations_csv_datasource::import_filename,
        repositories::obligations_repository_impl::ObligationsRepositoryImpl,
    },
    domain::{logic::session::Session, repositories::obligations_repository::ObligationsRepository},
    entities::{ImportOutcome, Obligation},
};

#[async_trait]
pub trait ImportUsecase: Send + Sync {
    async fn import_string(&self, filename: &str, contents: &str) -> ImportOutcome;

    async fn import_file<P>(&self, path: P) -> ImportOutcome
    where
        P: AsRef<std::path::Path> + Send;

    /// Imports several files concurrently. Outcomes are returned in input
    /// order; each file's obligations are appended contiguously.
    async fn import_files<P>(&self, paths: Vec<P>) -> Vec<ImportOutcome>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ImportUsecaseImpl<R = ObligationsRepositoryImpl>
where
    R: ObligationsRepository,
{
    session: Arc<Mutex<Session>>,
    repository: Arc<R>,
}

impl<R: ObligationsRepository> ImportUsecaseImpl<R> {
    pub(crate) fn new(session: Arc<Mutex<Session>>, repository: Arc<R>) -> Self {
        Self {
            session,
            repository,
        }
    }

    async fn is_duplicate(&self, filename: &str) -> bool {
        self.session.lock().await.has_imported(filename)
    }

    async fn finish(
        &self,
        filename: &str,
        parsed: Result<Vec<Obligation>, ServerError>,
    ) -> ImportOutcome {
        let mut session = self.session.lock().await;
        match parsed {
            Ok(obligations) => session.accept_import(filename, obligations),
            Err(_) if session.has_imported(filename) => {
                ImportOutcome::DuplicateFile(filename.to_string())
            }
            Err(e) => {
                tracing::warn!(filename, error = %e, "import failed");
                ImportOutcome::ParseError {
                    filename: filename.to_string(),
                    details: e.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl<R: ObligationsRepository> ImportUsecase for ImportUsecaseImpl<R> {
    async fn import_string(&self, filename: &str, contents: &str) -> ImportOutcome {
        if self.is_duplicate(filename).await {
            return ImportOutcome::DuplicateFile(filename.to_string());
        }
        let parsed = self.repository.parse(filename, contents);
        self.finish(filename, parsed).await
    }

    async fn import_file<P>(&self, path: P) -> ImportOutcome
    where
        P: AsRef<std::path::Path> + Send,
    {
        let filename = import_filename(path.as_ref());
        if self.is_duplicate(&filename).await {
            tracing::warn!(filename = %filename, "file already imported");
            return ImportOutcome::DuplicateFile(filename);
        }
        let parsed = self.repository.read_file(path).await;
        self.finish(&filename, parsed).await
    }

    async fn import_files<P>(&self, paths: Vec<P>) -> Vec<ImportOutcome>
    where
        P: AsRef<std::path::Path> + Send,
    {
        futures::future::join_all(paths.into_iter().map(|p| self.import_file(p))).await
    }
}
