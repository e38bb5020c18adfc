use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    data::repositories::obligations_repository_impl::ObligationsRepositoryImpl,
    domain::{logic::session::Session, repositories::obligations_repository::ObligationsRepository},
    errors::SplitUpError,
};

#[async_trait]
pub trait SubmitUsecase: Send + Sync {
    /// Sends the whole ledger for settlement, returning the HTML report.
    async fn submit(&self) -> Result<String, SplitUpError>;

    fn is_submitting(&self) -> bool;
}

pub(crate) struct SubmitUsecaseImpl<R = ObligationsRepositoryImpl>
where
    R: ObligationsRepository,
{
    session: Arc<Mutex<Session>>,
    repository: Arc<R>,
    in_flight: AtomicBool,
}

/// Holds the in-flight flag for the duration of one submission.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<R: ObligationsRepository> SubmitUsecaseImpl<R> {
    pub(crate) fn new(session: Arc<Mutex<Session>>, repository: Arc<R>) -> Self {
        Self {
            session,
            repository,
            in_flight: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl<R: ObligationsRepository> SubmitUsecase for SubmitUsecaseImpl<R> {
    async fn submit(&self) -> Result<String, SplitUpError> {
        let _guard =
            InFlightGuard::acquire(&self.in_flight).ok_or(SplitUpError::SubmitInProgress)?;

        // Snapshot so the session stays usable while the request is pending.
        let obligations = self.session.lock().await.obligations().to_vec();
        if obligations.is_empty() {
            return Err(SplitUpError::EmptyLedger);
        }

        tracing::info!(count = obligations.len(), "submitting obligations for settlement");
        self.repository.submit(&obligations).await.map_err(|e| {
            tracing::warn!(error = %e, "settlement submission failed");
            SplitUpError::SubmitFailed {
                details: e.to_string(),
            }
        })
    }

    fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
