use std::sync::Arc;

use fractic_server_error::ServerError;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    config::SplitUpConfig,
    data::repositories::obligations_repository_impl::ObligationsRepositoryImpl,
    domain::usecases::{
        export_usecase::{ExportUsecase as _, ExportUsecaseImpl},
        import_usecase::{ImportUsecase as _, ImportUsecaseImpl},
        submit_usecase::{SubmitUsecase as _, SubmitUsecaseImpl},
    },
    entities::{DebtGraph, ImportOutcome, Session},
    errors::SplitUpError,
    ext::{
        debt_network::{DebtNetworkSvgRenderer, Theme},
        settlement::{SettlementPreview, SettlementSimplifier},
    },
};

pub type SettlementReport = String;

/// Entry point for a split-payment session: the builder state and ledger,
/// plus file import, export and settlement submission around it.
pub struct SplitUpUtil {
    session: Arc<Mutex<Session>>,
    import_usecase: ImportUsecaseImpl,
    export_usecase: ExportUsecaseImpl,
    submit_usecase: SubmitUsecaseImpl,
    config: SplitUpConfig,
}

impl SplitUpUtil {
    pub fn new() -> Result<Self, ServerError> {
        Self::with_config(SplitUpConfig::default())
    }

    pub fn with_config(config: SplitUpConfig) -> Result<Self, ServerError> {
        let session = Arc::new(Mutex::new(Session::new()));
        let repository = Arc::new(ObligationsRepositoryImpl::new(&config)?);
        Ok(Self {
            import_usecase: ImportUsecaseImpl::new(session.clone(), repository.clone()),
            export_usecase: ExportUsecaseImpl::new(session.clone(), repository.clone()),
            submit_usecase: SubmitUsecaseImpl::new(session.clone(), repository),
            session,
            config,
        })
    }

    pub fn config(&self) -> &SplitUpConfig {
        &self.config
    }

    /// Locks the session for direct use of the builder and ledger operations.
    pub async fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    pub async fn import_string(&self, filename: &str, contents: &str) -> ImportOutcome {
        self.import_usecase.import_string(filename, contents).await
    }

    pub async fn import_file<P>(&self, path: P) -> ImportOutcome
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.import_usecase.import_file(path).await
    }

    pub async fn import_files<P>(&self, paths: Vec<P>) -> Vec<ImportOutcome>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.import_usecase.import_files(paths).await
    }

    pub async fn export_string(&self) -> Result<String, SplitUpError> {
        self.export_usecase.export_string().await
    }

    pub async fn export_to_file<P>(&self, path: P) -> Result<(), SplitUpError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.export_usecase.export_to_file(path).await
    }

    /// Writes the ledger into `dir` under the configured export filename.
    pub async fn export_to_dir<P>(&self, dir: P) -> Result<std::path::PathBuf, SplitUpError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = dir.as_ref().join(&self.config.export_filename);
        self.export_usecase.export_to_file(&path).await?;
        Ok(path)
    }

    pub async fn submit(&self) -> Result<SettlementReport, SplitUpError> {
        self.submit_usecase.submit().await
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_usecase.is_submitting()
    }

    pub async fn debt_graph(&self) -> DebtGraph {
        self.session.lock().await.debt_graph()
    }

    pub async fn render_debt_network(&self, theme: Theme) -> String {
        DebtNetworkSvgRenderer::new()
            .theme(theme)
            .render(&self.debt_graph().await)
    }

    pub async fn settlement_preview(&self) -> SettlementPreview {
        let session = self.session.lock().await;
        SettlementSimplifier::new().simplify(session.obligations())
    }
}
