//! Showcase CLI entrypoint: the terminal preview of the home page hero and
//! review strip.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use bubbletea_rs::Program;
use ortho_config::OrthoConfig;

use showcase::rotation::set_reduced_motion;
use showcase::tui::{ShowcaseApp, StartupContext, set_startup_context};
use showcase::{
    HeroSettings, NoopTelemetrySink, ReviewFeed, ShowcaseConfig, ShowcaseError,
    StderrJsonlTelemetrySink, TelemetrySink,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ShowcaseError> {
    let config = load_config()?;
    set_reduced_motion(config.reduced_motion);

    let telemetry = telemetry_sink(&config);
    let feed = ReviewFeed::for_endpoint(
        config.api_url(),
        config.request_timeout(),
        config.review_query(),
        Arc::clone(&telemetry),
    );

    // Store the context for ShowcaseApp::init() to retrieve. If already set,
    // the existing context remains.
    let _ = set_startup_context(StartupContext {
        hero: HeroSettings::from_config(&config),
        feed,
        telemetry,
    });

    run_tui().await.map_err(|error| ShowcaseError::Terminal {
        message: error.to_string(),
    })
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ShowcaseError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ShowcaseConfig, ShowcaseError> {
    ShowcaseConfig::load().map_err(|error| ShowcaseError::Configuration {
        message: error.to_string(),
    })
}

fn telemetry_sink(config: &ShowcaseConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

/// Runs the bubbletea-rs program with the `ShowcaseApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ShowcaseApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
