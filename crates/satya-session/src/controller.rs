//! `VerificationSession`: one operator's session against one service.
//!
//! Owns the claim input and the lifecycle manager, and hands requests to the
//! service. Requests can be awaited inline with [`VerificationSession::submit`]
//! or fired with [`VerificationSession::trigger`] and settled later, which
//! keeps the caller's event loop responsive while the request is pending.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use uuid::Uuid;

use satya_core::config::SessionConfig;
use satya_core::traits::{ISessionObserver, IVerificationService};
use satya_core::{LifecycleState, PendingTicket, SatyaResult, ServiceOutcome};

use crate::analytics::SessionAnalytics;
use crate::input::{ClaimInput, Trigger};
use crate::ledger::HistoryLedger;
use crate::lifecycle::{Completion, LifecycleManager, Rejection, SubmitOutcome};
use crate::view::{LedgerPanel, ResultView};

/// The request future for an issued ticket.
pub type RequestFuture = Pin<Box<dyn Future<Output = ServiceOutcome>>>;

/// A request that has been issued but not yet settled.
pub struct InFlight {
    pub ticket: PendingTicket,
    pub request: RequestFuture,
}

impl fmt::Debug for InFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InFlight")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

pub struct VerificationSession<S> {
    session_id: Uuid,
    input: ClaimInput,
    lifecycle: LifecycleManager,
    service: Arc<S>,
}

impl<S: IVerificationService> VerificationSession<S> {
    pub fn new(service: Arc<S>, config: SessionConfig) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(%session_id, "session: started");
        Self {
            session_id,
            input: ClaimInput::new(),
            lifecycle: LifecycleManager::new(config),
            service,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn subscribe(&mut self, observer: Box<dyn ISessionObserver>) {
        self.lifecycle.subscribe(observer);
    }

    pub fn set_claim(&mut self, text: impl Into<String>) {
        self.input.set_claim(text);
    }

    pub fn current_claim(&self) -> &str {
        self.input.current_claim()
    }

    /// Issue a request for the current claim and await it.
    pub async fn submit(&mut self, trigger: Trigger) -> SatyaResult<SubmitOutcome> {
        tracing::debug!(?trigger, "session: submit");
        let claim = self.input.current_claim().to_string();
        self.lifecycle.submit(self.service.as_ref(), &claim).await
    }

    /// Settle a request previously returned by [`VerificationSession::trigger`].
    pub fn settle(
        &mut self,
        ticket: &PendingTicket,
        outcome: ServiceOutcome,
    ) -> SatyaResult<Completion> {
        self.lifecycle.complete(ticket, outcome)
    }

    pub fn state(&self) -> &LifecycleState {
        self.lifecycle.state()
    }

    pub fn ledger(&self) -> &HistoryLedger {
        self.lifecycle.ledger()
    }

    /// Requests issued and not yet settled. Can be non-zero while the state
    /// shows a resolved result when concurrent submissions are enabled.
    pub fn in_flight(&self) -> usize {
        self.lifecycle.in_flight()
    }

    pub fn analytics(&self) -> &SessionAnalytics {
        self.lifecycle.analytics()
    }

    pub fn config(&self) -> &SessionConfig {
        self.lifecycle.config()
    }

    /// Detailed panel for the record on display, if the last request resolved.
    pub fn current_view(&self) -> Option<ResultView> {
        self.lifecycle
            .state()
            .resolved()
            .map(|record| ResultView::derive(record, self.lifecycle.config()))
    }

    pub fn ledger_panel(&self) -> LedgerPanel {
        LedgerPanel::from_ledger(self.lifecycle.ledger(), self.lifecycle.config())
    }

    /// Where the ledger explorer lives.
    pub fn explorer_url(&self) -> Option<String> {
        self.service.explorer_url()
    }
}

impl<S: IVerificationService + 'static> VerificationSession<S> {
    /// Issue a request for the current claim without awaiting it.
    ///
    /// The caller drives `request` to completion and passes its output to
    /// [`VerificationSession::settle`] with the same ticket.
    pub fn trigger(&mut self, trigger: Trigger) -> Result<InFlight, Rejection> {
        tracing::debug!(?trigger, "session: trigger");
        let ticket = self.lifecycle.begin(self.input.current_claim())?;
        let service = Arc::clone(&self.service);
        let claim = ticket.claim.clone();
        let request: RequestFuture = Box::pin(async move { service.verify(&claim).await });
        Ok(InFlight { ticket, request })
    }
}
