use std::process::ExitCode;

use tokio::io::BufReader;
use tokio::sync::mpsc;

use h3probe::cli::Cli;
use h3probe::config::app_config::{AppConfig, load_config, setup_orchestrator};
use h3probe::console::render_table;
use h3probe::export::export_csv;
use h3probe::interactive::run_interactive;
use h3probe::http_probe::prelude::HttpNegotiator;
use h3probe::logging::init_logging;
use h3probe::quic_probe::prelude::QuicProber;
use h3probe::{ProbeRunner, ResultStore};

type Runner = ProbeRunner<HttpNegotiator, QuicProber>;

fn apply_cli(app: &mut AppConfig, cli: &Cli) {
    if !cli.urls.is_empty() {
        app.config.targets = cli.urls.clone();
    }
    if let Some(ms) = cli.udp_timeout_ms {
        app.config.udp_timeout_ms = ms;
    }
    if let Some(secs) = cli.http_timeout_seconds {
        app.config.http_timeout_seconds = secs;
    }
    if let Some(path) = &cli.log_file {
        app.log_file = path.clone();
    }
}

fn export(store: &ResultStore, path: &std::path::Path) {
    match export_csv(path, &store.snapshot()) {
        Ok(()) => println!("CSV export written to {}", path.display()),
        Err(e) => eprintln!("CSV export to {} failed: {e}", path.display()),
    }
}

async fn run_batch(runner: &Runner, targets: Vec<String>, cli: &Cli) {
    let handles: Vec<_> = targets.into_iter().map(|url| runner.spawn(url)).collect();

    for handle in handles {
        if let Err(e) = handle.await {
            log::error!("Probe task failed: {e}");
        }
    }

    println!("{}", render_table(&runner.store().snapshot()));

    if let Some(path) = &cli.csv_out {
        export(runner.store(), path);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut app = match load_config(cli.config.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    apply_cli(&mut app, &cli);
    init_logging(&app.log_file);
    println!("Diagnostic log: {}", app.log_file.display());

    let orchestrator = match setup_orchestrator(&app.config) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            log::error!("Cannot set up HTTP client: {e}");
            eprintln!("Cannot set up HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let store = ResultStore::new();

    if cli.interactive {
        let (tx, rx) = mpsc::unbounded_channel();
        let runner = ProbeRunner::new(orchestrator, store).with_completions(tx);
        let stdin = BufReader::new(tokio::io::stdin());
        if let Err(e) = run_interactive(runner, rx, stdin, &mut std::io::stdout()).await {
            log::error!("Interactive session ended: {e}");
            return ExitCode::FAILURE;
        }
    } else {
        let runner = ProbeRunner::new(orchestrator, store);
        run_batch(&runner, app.config.targets_or_default(), &cli).await;
    }

    ExitCode::SUCCESS
}
