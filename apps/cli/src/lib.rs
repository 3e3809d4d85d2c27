pub mod config;
pub mod console;
pub mod error;
pub mod sets;

use drill_core::{Interaction, LoadError, SessionReport, SystemClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::console::Console;
use crate::error::{CliError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of one program run.
#[derive(Debug)]
pub enum RunOutcome {
    Studied(SessionReport),
    /// The chosen set failed validation; nothing was studied.
    Rejected(LoadError),
}

pub fn run() -> anyhow::Result<RunOutcome> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with prompts.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let mut console = Console::stdio();
    let outcome = run_with(&config, &mut console, &mut rand::rng())?;

    // Closed stdin here only means nobody is waiting to read the result.
    console.prompt("\nHit [ENTER] to close").ok();
    Ok(outcome)
}

/// Select, load and study one set using the given interaction and randomness.
pub fn run_with<I, R>(config: &AppConfig, io: &mut I, rng: &mut R) -> Result<RunOutcome>
where
    I: Interaction + ?Sized,
    R: rand::Rng,
{
    io.display(&format!("-- ManyWords {VERSION} --"))?;

    let sets = sets::list_sets(&config.sets_dir, config.set_extension.as_deref())?;
    let path = sets::select_set(io, &sets)?;

    let words = match sets::load_set(path) {
        Ok(words) => words,
        Err(CliError::Load(err)) => {
            tracing::warn!(path = %path.display(), error = %err, "study set rejected");
            io.display(&format!("Invalid study set: {err}"))?;
            return Ok(RunOutcome::Rejected(err));
        }
        Err(err) => return Err(err),
    };

    let report = drill_core::study(&words, config.settings.clone(), io, SystemClock, rng)?;
    Ok(RunOutcome::Studied(report))
}
