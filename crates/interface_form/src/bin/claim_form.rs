//! Claim Form - command line front end
//!
//! Fills the claim form from a JSON file, `--set` assignments and optional
//! prompts, submits it once to the prediction service and prints the screen.
//!
//! # Usage
//!
//! ```bash
//! claim-form --input claim.json
//! claim-form --input claim.json --set age=48 --endpoint http://localhost:8000
//! claim-form --interactive --strict
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIM_FORM_ENDPOINT` - Prediction service base URL (default: http://localhost:8000)
//! * `CLAIM_FORM_STRICT_VALIDATION` - Block submission on constraint violations (default: false)
//! * `CLAIM_FORM_REQUEST_TIMEOUT_SECS` - Request timeout (default: none)
//! * `CLAIM_FORM_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//!
//! Exits 0 when a result is shown, 1 otherwise.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_http::HttpPredictionAdapter;
use interface_form::input::{apply_json_claim, parse_assignment, prompt_missing};
use interface_form::{render_text, ClaimSubmissionForm, FormConfig, SubmitBlocked};

#[derive(Debug, Parser)]
#[command(name = "claim-form", version, about = "Check an insurance claim for fraud")]
struct Cli {
    /// JSON file with claim values keyed by field name
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Set one field, e.g. --set age=48 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_set)]
    set: Vec<(String, String)>,

    /// Prediction service base URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Refuse to submit values that break their input constraints
    #[arg(long)]
    strict: bool,

    /// Prompt for fields that are still empty
    #[arg(short, long)]
    interactive: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

fn parse_set(raw: &str) -> Result<(String, String), String> {
    parse_assignment(raw).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.log_level);

    let mut form = ClaimSubmissionForm::with_config(&config);

    if let Some(path) = &cli.input {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        apply_json_claim(&mut form, &json).with_context(|| format!("loading {}", path.display()))?;
    }
    for (name, value) in &cli.set {
        form.update_field_by_name(name, value.as_str())?;
    }
    if cli.interactive {
        let stdin = io::stdin();
        prompt_missing(&mut form, stdin.lock(), io::stderr())?;
    }

    let adapter = HttpPredictionAdapter::new(config.client_config())?;
    tracing::debug!(url = %adapter.predict_url(), "prediction endpoint");

    let blocked = match form.submit(&adapter).await {
        Ok(()) => None,
        Err(blocked) => Some(blocked),
    };

    print!("{}", render_text(&form.view()));

    if let Some(blocked) = blocked {
        report_blocked(&blocked);
        return Ok(ExitCode::FAILURE);
    }

    Ok(if form.result().is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Environment configuration with command line overrides applied
fn load_config(cli: &Cli) -> anyhow::Result<FormConfig> {
    let config = FormConfig::from_env().context("reading CLAIM_FORM_* configuration")?;
    Ok(apply_overrides(cli, config))
}

fn apply_overrides(cli: &Cli, mut config: FormConfig) -> FormConfig {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if cli.strict {
        config.strict_validation = true;
    }
    if cli.timeout_secs.is_some() {
        config.request_timeout_secs = cli.timeout_secs;
    }
    config
}

fn report_blocked(blocked: &SubmitBlocked) {
    eprintln!();
    eprintln!("Not submitted: {blocked}");
    if let SubmitBlocked::Invalid(issues) = blocked {
        for issue in issues {
            eprintln!("  - {issue}");
        }
    }
}

/// Logs go to stderr so the rendered form stays clean on stdout.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr),
        )
        .init();
}
