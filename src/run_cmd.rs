use std::path::PathBuf;

use tracing::info;

use crate::config::{DemoConfig, load_config};
use crate::core::env::EnvironmentInfo;
use crate::core::schema::{FetchOutcome, ProblemSize};
use crate::provider::{ResultProvider, SimulatedProvider};
use crate::report::{render_screen, write_html, write_output};
use crate::session::{DemoSession, SessionState, ViewMode};
use crate::{DemoError, DemoResult};

/// Options for one `run` invocation. Unset fields fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub size: Option<ProblemSize>,
    pub view: Option<ViewMode>,
    pub json: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub async fn run(opts: RunOptions) -> DemoResult<()> {
    let cfg = match &opts.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };
    let provider = match opts.seed.or(cfg.seed) {
        Some(seed) => SimulatedProvider::with_seed(seed),
        None => SimulatedProvider::new(),
    };
    let mut session = DemoSession::new(
        opts.size.unwrap_or(cfg.default_size),
        opts.view.unwrap_or(cfg.view),
    );
    run_with(&provider, &mut session, &opts).await
}

/// Drive one request through `session` and emit the requested outputs.
pub async fn run_with<P>(provider: &P, session: &mut DemoSession, opts: &RunOptions) -> DemoResult<()>
where
    P: ResultProvider + ?Sized,
{
    let ticket = session.begin();
    info!(size = %ticket.size, provider = provider.name(), "running demo");
    println!("{}", render_screen(session));

    let fetched = provider.fetch_result(ticket.size).await;
    let outcome = fetched.as_ref().ok().cloned();
    session.resolve(ticket, fetched);
    println!("{}", render_screen(session));

    if let SessionState::Failed { message } = session.state() {
        return Err(DemoError::RequestFailure(message.clone()));
    }
    if let Some(outcome) = &outcome {
        write_outputs(outcome, opts)?;
    }
    Ok(())
}

fn write_outputs(outcome: &FetchOutcome, opts: &RunOptions) -> DemoResult<()> {
    if let Some(path) = &opts.json {
        let json = serde_json::to_vec_pretty(outcome)
            .map_err(|e| DemoError::Message(format!("failed to serialize result: {e}")))?;
        write_output(path, json)?;
        info!(path = %path.display(), "wrote JSON result");
    }
    if let Some(path) = &opts.html {
        write_html(path, outcome, &EnvironmentInfo::detect())?;
        info!(path = %path.display(), "wrote HTML report");
    }
    Ok(())
}
