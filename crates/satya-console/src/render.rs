//! Terminal rendering of session events and panels.

use std::io::{self, Write};

use satya_core::config::SessionConfig;
use satya_core::traits::ISessionObserver;
use satya_core::{LifecycleState, SessionEvent};
use satya_session::view::EMPTY_LEDGER_TEXT;
use satya_session::{LedgerPanel, ResultView, SessionAnalytics};

/// Writes the detailed result panel. The hash is printed in full.
pub fn write_result(out: &mut impl Write, view: &ResultView) -> io::Result<()> {
    writeln!(
        out,
        "{} {}  trust score {}/100 ({})",
        view.classification.marker(),
        view.verdict,
        view.score_text(),
        view.classification.label()
    )?;
    writeln!(out, "    {}", view.claim_summary)?;
    if !view.evidence.is_empty() {
        writeln!(out, "    evidence:")?;
        for link in &view.evidence {
            writeln!(out, "      - {link}")?;
        }
    }
    writeln!(out, "    block #{}  hash {}", view.block_index, view.block_hash)?;
    if let Some(previous) = &view.previous_hash {
        writeln!(out, "    previous {previous}")?;
    }
    Ok(())
}

/// Writes the ledger feed, newest first, or the empty-state prompt.
pub fn write_ledger(out: &mut impl Write, panel: &LedgerPanel) -> io::Result<()> {
    match panel {
        LedgerPanel::Empty => writeln!(out, "{EMPTY_LEDGER_TEXT}"),
        LedgerPanel::Entries(rows) => {
            writeln!(out, "ledger ({} blocks)", rows.len())?;
            for row in rows {
                writeln!(
                    out,
                    "  #{:<5} {} {:<16} {}  {}",
                    row.block_index,
                    row.classification.marker(),
                    row.verdict,
                    row.hash_preview,
                    row.claim_summary
                )?;
            }
            Ok(())
        }
    }
}

pub fn write_stats(out: &mut impl Write, stats: &SessionAnalytics) -> io::Result<()> {
    writeln!(out, "session started {}", stats.started_at.to_rfc3339())?;
    writeln!(
        out,
        "  submitted {}  resolved {} ({} trusted, {} flagged)",
        stats.submissions, stats.resolved, stats.trusted, stats.flagged
    )?;
    writeln!(
        out,
        "  failed {} (backend {}, connectivity {})",
        stats.failures(),
        stats.backend_failures,
        stats.connectivity_failures
    )?;
    writeln!(
        out,
        "  ignored {} empty, {} while pending",
        stats.rejected_empty, stats.rejected_in_flight
    )?;
    writeln!(out, "  avg latency {:.0} ms", stats.avg_latency_ms())
}

/// Session observer that repaints the terminal after every event.
pub struct TerminalRenderer<W> {
    out: W,
    config: SessionConfig,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W, config: SessionConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &SessionEvent) -> io::Result<()> {
        match event {
            SessionEvent::StateChanged(LifecycleState::Pending { .. }) => {
                writeln!(self.out, "verifying...")?
            }
            SessionEvent::StateChanged(LifecycleState::Resolved(record)) => {
                write_result(&mut self.out, &ResultView::derive(record, &self.config))?
            }
            SessionEvent::StateChanged(_) => {}
            SessionEvent::LedgerPrepended {
                block_index,
                ledger_len,
            } => writeln!(
                self.out,
                "block #{block_index} added to ledger ({ledger_len} total)"
            )?,
            SessionEvent::Alert(alert) => writeln!(self.out, "!! {}", alert.text)?,
        }
        self.out.flush()
    }
}

impl<W: Write + Send> ISessionObserver for TerminalRenderer<W> {
    fn notify(&mut self, event: &SessionEvent) {
        if let Err(e) = self.render(event) {
            tracing::warn!("render: failed writing to terminal: {e}");
        }
    }
}
