use crate::models::SessionEvent;

/// Receives every session event, in order, right after it happens.
///
/// This is the redraw step: a renderer repaints on `StateChanged`, shows
/// the new ledger head on `LedgerPrepended`, and blocks on `Alert` until
/// the operator has seen it.
pub trait ISessionObserver: Send {
    fn notify(&mut self, event: &SessionEvent);
}
