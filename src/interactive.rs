use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::console::{Command, format_result, parse_command, render_table};
use crate::export::export_csv;
use crate::probe::prelude::*;

pub const PROMPT: &str = "Enter a URL to probe, or: list | export <file> | clear | quit";

fn export<N, R>(
    runner: &ProbeRunner<N, R>,
    path: &std::path::Path,
    out: &mut impl Write,
) -> std::io::Result<()>
where
    N: Negotiator + 'static,
    R: ReachabilityProber + 'static,
{
    match export_csv(path, &runner.store().snapshot()) {
        Ok(()) => writeln!(out, "CSV export written to {}", path.display()),
        Err(e) => writeln!(out, "CSV export to {} failed: {e}", path.display()),
    }
}

/// Reads URLs and commands from `input` until EOF or `quit`, printing each
/// finished probe to `out` as it completes.
///
/// Probes still running when input ends are awaited, and their results
/// printed, before this returns.
pub async fn run_interactive<N, R, I, W>(
    runner: ProbeRunner<N, R>,
    mut completions: UnboundedReceiver<ProbeResult>,
    input: I,
    out: &mut W,
) -> std::io::Result<()>
where
    N: Negotiator + 'static,
    R: ReachabilityProber + 'static,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut in_flight: Vec<JoinHandle<ProbeResult>> = Vec::new();
    writeln!(out, "{PROMPT}")?;

    loop {
        tokio::select! {
            Some(result) = completions.recv() => writeln!(out, "{}", format_result(&result))?,
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        writeln!(out, "Cannot read input: {e}")?;
                        break;
                    }
                };
                match parse_command(&line) {
                    Command::Probe(url) => {
                        writeln!(out, "Probing {url}...")?;
                        in_flight.retain(|handle| !handle.is_finished());
                        in_flight.push(runner.spawn(url));
                    }
                    Command::List => {
                        writeln!(out, "{}", render_table(&runner.store().snapshot()))?
                    }
                    Command::Export(path) => export(&runner, &path, out)?,
                    Command::Clear => {
                        runner.store().clear();
                        writeln!(out, "Results cleared")?;
                    }
                    Command::Quit => break,
                    Command::Empty => {}
                    Command::Unknown(msg) => writeln!(out, "{msg}")?,
                }
            }
        }
    }

    if !in_flight.is_empty() {
        log::info!("Waiting for {} running probe(s)", in_flight.len());
    }
    for handle in in_flight {
        if let Err(e) = handle.await {
            log::error!("Probe task failed: {e}");
        }
    }

    // every finished task has already sent its result
    while let Ok(result) = completions.try_recv() {
        writeln!(out, "{}", format_result(&result))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::io::BufReader;
    use tokio::sync::mpsc;

    use super::*;
    use crate::http_probe::prelude::NegotiationOutcome;
    use crate::quic_probe::prelude::ReachabilityOutcome;
    use crate::store::ResultStore;
    use crate::target::ParsedTarget;

    /// Takes longer than it takes to read all input.
    struct SlowNegotiator(Duration);

    #[async_trait]
    impl Negotiator for SlowNegotiator {
        async fn negotiate(&self, _target: &ParsedTarget) -> NegotiationOutcome {
            tokio::time::sleep(self.0).await;
            NegotiationOutcome::NegotiatedH2
        }
    }

    struct SilentUdp;

    #[async_trait]
    impl ReachabilityProber for SilentUdp {
        async fn probe_reachability(&self, _hostname: &str) -> ReachabilityOutcome {
            ReachabilityOutcome::NoResponse
        }
    }

    async fn drive(script: &'static str) -> (String, ResultStore) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = ResultStore::new();
        let orchestrator = Orchestrator::new(SlowNegotiator(Duration::from_millis(200)), SilentUdp);
        let runner = ProbeRunner::new(orchestrator, store.clone()).with_completions(tx);

        let mut out = Vec::new();
        run_interactive(runner, rx, BufReader::new(script.as_bytes()), &mut out)
            .await
            .unwrap();
        (String::from_utf8(out).unwrap(), store)
    }

    #[tokio::test]
    async fn test_eof_waits_for_running_probes() {
        let (out, store) = drive("https://a.test/\nhttps://b.test/\n").await;

        assert_eq!(store.len(), 2);
        assert!(out.contains("https://a.test/ -> No [h2]"));
        assert!(out.contains("https://b.test/ -> No [h2]"));
    }

    #[tokio::test]
    async fn test_quit_waits_for_running_probes() {
        let (out, store) = drive("https://a.test/\nquit\nhttps://never.test/\n").await;

        assert_eq!(store.len(), 1);
        assert!(out.contains("https://a.test/ -> No [h2] HTTP/2 utilise"));
        assert!(!out.contains("never.test"));
    }

    #[tokio::test]
    async fn test_commands() {
        let (out, store) = drive("frobnicate\nclear\nlist\n").await;

        assert!(store.is_empty());
        assert!(out.starts_with(PROMPT));
        assert!(out.contains("unknown command 'frobnicate'"));
        assert!(out.contains("Results cleared"));
        assert!(out.contains("HTTP/3 Support"));
    }
}
