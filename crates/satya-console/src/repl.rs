//! Interactive console loop.
//!
//! Each typed line replaces the claim and fires the submit key; `:`-prefixed
//! lines are console commands. Requests run as local tasks and report back
//! over a channel, so the prompt stays live while a request is pending.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use satya_core::traits::IVerificationService;
use satya_core::{PendingTicket, ServiceOutcome};
use satya_session::{Rejection, Trigger, VerificationSession};

use crate::render;

const HELP: &str = "\
type a claim or URL and press enter to verify it
  :verify    verify the current claim again
  :claim     show the current claim
  :ledger    show this session's ledger, newest first
  :stats     show session statistics
  :explorer  show where the full chain can be browsed
  :help      show this help
  :quit      leave the console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the claim with this line and fire the submit key.
    Submit(String),
    Verify,
    ShowClaim,
    Ledger,
    Stats,
    Explorer,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Self::Submit(line.to_string());
        };
        match command.trim() {
            "verify" | "v" => Self::Verify,
            "claim" => Self::ShowClaim,
            "ledger" | "l" => Self::Ledger,
            "stats" => Self::Stats,
            "explorer" | "chain" => Self::Explorer,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

type Settled = (PendingTicket, ServiceOutcome);

/// Run the console until `:quit` or end of input. Must be called inside a
/// `LocalSet`.
pub async fn run<S>(session: &mut VerificationSession<S>) -> Result<()>
where
    S: IVerificationService + 'static,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel::<Settled>();
    let mut stdin_open = true;

    say(HELP)?;
    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line.context("failed reading from stdin")? {
                    Some(line) => {
                        if !dispatch(session, Command::parse(&line), &settled_tx)? {
                            break;
                        }
                    }
                    None => {
                        stdin_open = false;
                        if input_drained(stdin_open, session) {
                            break;
                        }
                        tracing::debug!(
                            in_flight = session.in_flight(),
                            "console: input closed, waiting for pending requests"
                        );
                    }
                }
            }
            Some((ticket, outcome)) = settled_rx.recv() => {
                if let Err(e) = session.settle(&ticket, outcome) {
                    tracing::warn!(ticket = ticket.id, "console: dropped completion: {e}");
                }
                if input_drained(stdin_open, session) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// The loop may exit once input has closed and every issued request has
/// settled, including overlapping ones whose siblings already resolved.
fn input_drained<S: IVerificationService>(
    stdin_open: bool,
    session: &VerificationSession<S>,
) -> bool {
    !stdin_open && session.in_flight() == 0
}

/// Apply one command. Returns `false` when the console should exit.
fn dispatch<S>(
    session: &mut VerificationSession<S>,
    command: Command,
    settled_tx: &mpsc::UnboundedSender<Settled>,
) -> Result<bool>
where
    S: IVerificationService + 'static,
{
    let mut out = io::stdout().lock();
    match command {
        Command::Submit(claim) => {
            session.set_claim(claim);
            fire(session, Trigger::Key, settled_tx, &mut out)?;
        }
        Command::Verify => fire(session, Trigger::Action, settled_tx, &mut out)?,
        Command::ShowClaim => writeln!(out, "{:?}", session.current_claim())?,
        Command::Ledger => render::write_ledger(&mut out, &session.ledger_panel())?,
        Command::Stats => render::write_stats(&mut out, session.analytics())?,
        Command::Explorer => match session.explorer_url() {
            Some(url) => writeln!(out, "explorer: {url}")?,
            None => writeln!(out, "no explorer configured")?,
        },
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
        Command::Unknown(name) => writeln!(out, "unknown command ':{name}', try :help")?,
    }
    out.flush()?;
    Ok(true)
}

fn fire<S>(
    session: &mut VerificationSession<S>,
    trigger: Trigger,
    settled_tx: &mpsc::UnboundedSender<Settled>,
    out: &mut impl Write,
) -> Result<()>
where
    S: IVerificationService + 'static,
{
    match session.trigger(trigger) {
        Ok(in_flight) => {
            let tx = settled_tx.clone();
            tokio::task::spawn_local(async move {
                let outcome = in_flight.request.await;
                // Receiver only closes when the console is exiting.
                let _ = tx.send((in_flight.ticket, outcome));
            });
        }
        Err(Rejection::EmptyClaim) => {}
        Err(Rejection::InFlight { .. }) => {
            writeln!(out, "still verifying the previous claim, please wait")?
        }
    }
    Ok(())
}

fn say(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
