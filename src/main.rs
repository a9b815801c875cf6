//! signup-prefill CLI - fills a signup form in a browser and stops short of submitting.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use signup_prefill::config::DEFAULT_SIGNUP_URL;
use signup_prefill::generator::{generate_user_data, WordLists};
use signup_prefill::{Error, RunConfigBuilder, SignupRunner, UserData};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Word lists shipped with the crate, independent of the working directory.
const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Generate random user data from the word lists
    Automatic,
    /// Use the JSON payload given with --data
    Manual,
}

#[derive(Parser)]
#[command(name = "signup-prefill")]
#[command(version)]
#[command(about = "Prefill a signup form in a browser without submitting it")]
struct Cli {
    /// Where the user data comes from
    #[arg(long, value_enum)]
    mode: Mode,

    /// JSON user data (required in manual mode)
    #[arg(long)]
    data: Option<String>,

    /// Run without a visible window and close as soon as filling ends
    #[arg(long)]
    headless: bool,

    /// Seconds to wait for each form element
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Signup page to open
    #[arg(long, env = "SIGNUP_URL", default_value = DEFAULT_SIGNUP_URL)]
    url: String,

    /// Directory holding names.txt, lastname.txt, mailproviders.txt and uszip.txt
    /// (defaults to the lists bundled in the source tree; relative paths resolve
    /// against the current directory)
    #[arg(long, env = "SIGNUP_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Chrome/Chromium executable to launch instead of the detected one
    #[arg(long, env = "CHROME_PATH")]
    chrome_path: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Result object for failures that happen before a run starts.
#[derive(Serialize)]
struct EarlyFailure {
    success: bool,
    error: String,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn user_data_for(cli: &Cli) -> signup_prefill::Result<UserData> {
    match cli.mode {
        Mode::Automatic => {
            let lists = WordLists::load(&cli.data_dir)?;
            let today = chrono::Local::now().date_naive();
            generate_user_data(&lists, &mut rand::thread_rng(), today)
        }
        Mode::Manual => {
            let payload = cli.data.as_deref().ok_or(Error::MissingManualData)?;
            UserData::from_json(payload)
        }
    }
}

fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize result: {e}"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let user = match user_data_for(&cli) {
        Ok(user) => user,
        Err(e) => {
            error!("{e}");
            emit(&EarlyFailure {
                success: false,
                error: e.to_string(),
            });
            return ExitCode::FAILURE;
        }
    };

    let mut builder = RunConfigBuilder::new()
        .headless(cli.headless)
        .element_timeout(Duration::from_secs(cli.timeout))
        .target_url(cli.url.clone());
    if let Some(path) = &cli.chrome_path {
        builder = builder.chrome_path(path.clone());
    }

    let runner = SignupRunner::new(builder.build());
    let result = runner.run(user).await;

    info!("=== RESULT ===");
    emit(&result);

    if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
