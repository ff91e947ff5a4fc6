//! Verification lifecycle manager.
//!
//! Drives requests through `Idle → Pending → Resolved | Failed → Idle` and is
//! the only writer of the history ledger. Every transition is followed by an
//! explicit notification to the subscribed observers, and a completion's
//! state change is always notified before its ledger prepend or alert.
//!
//! Double submission: unless `allow_concurrent_submissions` is set, `begin`
//! rejects while a request is outstanding, whichever trigger fired it. With
//! it set, requests overlap and land in the ledger in completion order.

use std::sync::Arc;
use std::time::Instant;

use satya_core::config::SessionConfig;
use satya_core::errors::SessionError;
use satya_core::traits::{ISessionObserver, IVerificationService};
use satya_core::{
    FailureReason, LifecycleState, PendingTicket, SatyaResult, ServiceOutcome, SessionEvent,
    VerificationRecord,
};

use crate::analytics::SessionAnalytics;
use crate::input::is_submittable;
use crate::ledger::HistoryLedger;
use crate::view::Classification;

/// Why `begin` declined to issue a request. Neither changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Empty or whitespace-only claim. Silent no-op.
    EmptyClaim,
    /// A request is already outstanding.
    InFlight { ticket: u64 },
}

/// How a request that was issued ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Resolved(Arc<VerificationRecord>),
    Failed(FailureReason),
}

/// Result of a full `submit` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    Completed(Completion),
}

pub struct LifecycleManager {
    state: LifecycleState,
    ledger: HistoryLedger,
    analytics: SessionAnalytics,
    /// Issued and not yet completed, oldest first.
    outstanding: Vec<PendingTicket>,
    next_ticket: u64,
    config: SessionConfig,
    observers: Vec<Box<dyn ISessionObserver>>,
}

impl LifecycleManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: LifecycleState::Idle,
            ledger: HistoryLedger::new(),
            analytics: SessionAnalytics::default(),
            outstanding: Vec::new(),
            next_ticket: 1,
            config,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn ISessionObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// Read-only view of the ledger. Only this manager mutates it.
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn analytics(&self) -> &SessionAnalytics {
        &self.analytics
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of requests issued and not yet completed.
    pub fn in_flight(&self) -> usize {
        self.outstanding.len()
    }

    /// Issue a ticket for `claim` and move to `Pending`, clearing any
    /// displayed result. The ledger is untouched.
    pub fn begin(&mut self, claim: &str) -> Result<PendingTicket, Rejection> {
        if !is_submittable(claim) {
            self.analytics.record_rejected_empty();
            tracing::debug!("lifecycle: empty claim ignored");
            return Err(Rejection::EmptyClaim);
        }
        if !self.config.allow_concurrent_submissions {
            if let Some(current) = self.outstanding.last() {
                self.analytics.record_rejected_in_flight();
                tracing::warn!(
                    ticket = current.id,
                    "lifecycle: submission rejected, request already in flight"
                );
                return Err(Rejection::InFlight { ticket: current.id });
            }
        }

        let ticket = PendingTicket {
            id: self.next_ticket,
            claim: claim.to_string(),
            issued_at: Instant::now(),
        };
        self.next_ticket += 1;
        self.outstanding.push(ticket.clone());
        self.analytics.record_submission();
        tracing::debug!(
            ticket = ticket.id,
            in_flight = self.outstanding.len(),
            "lifecycle: pending"
        );

        self.transition(LifecycleState::Pending { ticket: ticket.id });
        Ok(ticket)
    }

    /// Apply the outcome of the request `ticket` was issued for.
    ///
    /// Success: `Resolved`, then the record is prepended to the ledger.
    /// Failure: `Failed`, then the alert, then back to `Idle` (or `Pending`
    /// if other requests are still outstanding).
    pub fn complete(
        &mut self,
        ticket: &PendingTicket,
        outcome: ServiceOutcome,
    ) -> SatyaResult<Completion> {
        let position = self
            .outstanding
            .iter()
            .position(|t| t.id == ticket.id)
            .ok_or_else(|| match self.outstanding.last() {
                Some(latest) => SessionError::TicketMismatch {
                    latest: latest.id,
                    actual: ticket.id,
                },
                None => SessionError::NotPending,
            })?;
        let ticket = self.outstanding.remove(position);
        let latency = ticket.issued_at.elapsed();

        let completion = match outcome {
            ServiceOutcome::Success(record) => {
                let record = Arc::new(record);
                let classification = Classification::from_score(
                    record.trust_score(),
                    self.config.trust_threshold,
                );
                self.analytics.record_resolved(classification, latency);
                tracing::info!(
                    ticket = ticket.id,
                    block = record.block_index(),
                    trust_score = record.trust_score(),
                    classification = classification.label(),
                    latency_ms = latency.as_millis() as u64,
                    "lifecycle: resolved"
                );

                self.transition(LifecycleState::Resolved(Arc::clone(&record)));
                let ledger_len = self.ledger.prepend(Arc::clone(&record), ticket.claim);
                self.emit(SessionEvent::LedgerPrepended {
                    block_index: record.block_index(),
                    ledger_len,
                });
                Completion::Resolved(record)
            }
            ServiceOutcome::LogicalError { detail } => {
                self.fail(ticket.id, FailureReason::Backend(detail), latency)
            }
            ServiceOutcome::TransportError { reason } => {
                self.fail(ticket.id, FailureReason::Connectivity(reason), latency)
            }
        };
        Ok(completion)
    }

    /// `begin`, one round trip, `complete`.
    pub async fn submit<S: IVerificationService>(
        &mut self,
        service: &S,
        claim: &str,
    ) -> SatyaResult<SubmitOutcome> {
        let ticket = match self.begin(claim) {
            Ok(ticket) => ticket,
            Err(rejection) => return Ok(SubmitOutcome::Rejected(rejection)),
        };
        let outcome = service.verify(&ticket.claim).await;
        let completion = self.complete(&ticket, outcome)?;
        Ok(SubmitOutcome::Completed(completion))
    }

    fn fail(
        &mut self,
        ticket: u64,
        reason: FailureReason,
        latency: std::time::Duration,
    ) -> Completion {
        self.analytics.record_failure(&reason, latency);
        match &reason {
            FailureReason::Backend(detail) => {
                tracing::warn!(ticket, "lifecycle: backend error: {detail}")
            }
            FailureReason::Connectivity(cause) => {
                tracing::warn!(ticket, "lifecycle: connectivity error: {cause}")
            }
        }

        self.transition(LifecycleState::Failed(reason.clone()));
        self.emit(SessionEvent::Alert(reason.alert()));

        let next = match self.outstanding.last() {
            Some(other) => LifecycleState::Pending { ticket: other.id },
            None => LifecycleState::Idle,
        };
        self.transition(next);
        Completion::Failed(reason)
    }

    fn transition(&mut self, next: LifecycleState) {
        tracing::trace!(from = %self.state, to = %next, "lifecycle: transition");
        self.state = next;
        let event = SessionEvent::StateChanged(self.state.clone());
        self.emit(event);
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{make_record, RecordingObserver};

    fn manager() -> LifecycleManager {
        LifecycleManager::new(SessionConfig::default())
    }

    #[test]
    fn empty_claim_is_a_silent_no_op() {
        let (observer, events) = RecordingObserver::new();
        let mut lifecycle = manager();
        lifecycle.subscribe(Box::new(observer));

        assert_eq!(lifecycle.begin(""), Err(Rejection::EmptyClaim));
        assert_eq!(lifecycle.begin("   "), Err(Rejection::EmptyClaim));
        assert!(lifecycle.state().is_idle());
        assert_eq!(lifecycle.in_flight(), 0);
        assert!(events.lock().unwrap().is_empty());
        assert_eq!(lifecycle.analytics().rejected_empty, 2);
    }

    #[test]
    fn second_begin_while_pending_is_rejected() {
        let mut lifecycle = manager();
        let first = lifecycle.begin("claim one").unwrap();
        assert_eq!(
            lifecycle.begin("claim two"),
            Err(Rejection::InFlight { ticket: first.id })
        );
        assert_eq!(lifecycle.in_flight(), 1);
        assert_eq!(lifecycle.state(), &LifecycleState::Pending { ticket: first.id });
    }

    #[test]
    fn success_transitions_then_prepends() {
        let (observer, events) = RecordingObserver::new();
        let mut lifecycle = manager();
        lifecycle.subscribe(Box::new(observer));

        let ticket = lifecycle.begin("claim").unwrap();
        let completion = lifecycle
            .complete(&ticket, ServiceOutcome::Success(make_record(4, 91.0, "abc")))
            .unwrap();
        assert!(matches!(completion, Completion::Resolved(_)));

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            SessionEvent::StateChanged(LifecycleState::Pending { ticket: ticket.id })
        );
        assert!(matches!(
            events[1],
            SessionEvent::StateChanged(LifecycleState::Resolved(_))
        ));
        assert_eq!(
            events[2],
            SessionEvent::LedgerPrepended {
                block_index: 4,
                ledger_len: 1
            }
        );
        assert_eq!(lifecycle.ledger().head().unwrap().claim, "claim");
    }

    #[test]
    fn failure_alerts_then_returns_to_idle() {
        let (observer, events) = RecordingObserver::new();
        let mut lifecycle = manager();
        lifecycle.subscribe(Box::new(observer));

        let ticket = lifecycle.begin("claim").unwrap();
        lifecycle
            .complete(&ticket, ServiceOutcome::logical("Rate limit exceeded"))
            .unwrap();

        let events = events.lock().unwrap();
        let reason = FailureReason::Backend("Rate limit exceeded".into());
        assert_eq!(
            events[1..],
            [
                SessionEvent::StateChanged(LifecycleState::Failed(reason.clone())),
                SessionEvent::Alert(reason.alert()),
                SessionEvent::StateChanged(LifecycleState::Idle),
            ]
        );
        assert!(lifecycle.state().is_idle());
        assert!(lifecycle.ledger().is_empty());
    }

    #[test]
    fn completing_twice_is_an_error() {
        let mut lifecycle = manager();
        let ticket = lifecycle.begin("claim").unwrap();
        lifecycle
            .complete(&ticket, ServiceOutcome::transport("refused"))
            .unwrap();
        let err = lifecycle
            .complete(&ticket, ServiceOutcome::transport("refused"))
            .unwrap_err();
        assert!(matches!(
            err,
            satya_core::SatyaError::Session(SessionError::NotPending)
        ));
    }

    #[test]
    fn foreign_ticket_is_a_mismatch() {
        let mut lifecycle = manager();
        let ticket = lifecycle.begin("claim").unwrap();
        let forged = PendingTicket {
            id: ticket.id + 100,
            ..ticket.clone()
        };
        let err = lifecycle
            .complete(&forged, ServiceOutcome::Success(make_record(1, 1.0, "h")))
            .unwrap_err();
        assert!(matches!(
            err,
            satya_core::SatyaError::Session(SessionError::TicketMismatch { latest, actual })
                if latest == ticket.id && actual == ticket.id + 100
        ));
        assert!(lifecycle.ledger().is_empty());
        assert_eq!(lifecycle.in_flight(), 1);
    }

    #[test]
    fn resolved_is_cleared_by_next_begin() {
        let mut lifecycle = manager();
        let first = lifecycle.begin("one").unwrap();
        lifecycle
            .complete(&first, ServiceOutcome::Success(make_record(1, 80.0, "a")))
            .unwrap();
        assert!(lifecycle.state().resolved().is_some());

        let second = lifecycle.begin("two").unwrap();
        assert_eq!(lifecycle.state(), &LifecycleState::Pending { ticket: second.id });
        assert_eq!(lifecycle.ledger().len(), 1);
    }

    #[test]
    fn concurrent_mode_lands_in_completion_order() {
        let mut lifecycle = LifecycleManager::new(SessionConfig {
            allow_concurrent_submissions: true,
            ..Default::default()
        });
        let first = lifecycle.begin("first").unwrap();
        let second = lifecycle.begin("second").unwrap();
        assert_eq!(lifecycle.in_flight(), 2);

        // Second request finishes first.
        lifecycle
            .complete(&second, ServiceOutcome::Success(make_record(20, 90.0, "b")))
            .unwrap();
        lifecycle
            .complete(&first, ServiceOutcome::Success(make_record(10, 30.0, "a")))
            .unwrap();

        let indices: Vec<u64> = lifecycle
            .ledger()
            .all()
            .iter()
            .map(|r| r.block_index())
            .collect();
        assert_eq!(indices, vec![10, 20]);
        assert_eq!(lifecycle.in_flight(), 0);
    }

    #[test]
    fn concurrent_mode_failure_stays_pending_while_others_outstanding() {
        let mut lifecycle = LifecycleManager::new(SessionConfig {
            allow_concurrent_submissions: true,
            ..Default::default()
        });
        let first = lifecycle.begin("first").unwrap();
        let second = lifecycle.begin("second").unwrap();

        lifecycle
            .complete(&first, ServiceOutcome::transport("reset"))
            .unwrap();
        assert_eq!(lifecycle.state(), &LifecycleState::Pending { ticket: second.id });

        lifecycle
            .complete(&second, ServiceOutcome::transport("reset"))
            .unwrap();
        assert!(lifecycle.state().is_idle());
        assert_eq!(lifecycle.analytics().connectivity_failures, 2);
    }
}
