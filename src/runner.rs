//! Drives one run: launch, navigate, detect, fill, then review or close.

use std::fmt;
use std::future::Future;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::browser::SignupSession;
use crate::config::{RunConfig, SessionMode};
use crate::error::Result;
use crate::filler::{fill_form, FillReport, FillTimings};
use crate::surface::FormSession;
use crate::user_data::UserData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Navigated,
    LayoutDetected,
    FieldsFilled,
    Review,
    Closed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Init => "init",
            RunState::Navigated => "navigated",
            RunState::LayoutDetected => "layout-detected",
            RunState::FieldsFilled => "fields-filled",
            RunState::Review => "review",
            RunState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// The echoed input plus run timestamps, in epoch milliseconds.
#[derive(Debug, Clone, Serialize)]
pub struct RunData {
    #[serde(flatten)]
    pub user: UserData,
    pub init_time: i64,
    pub last_time: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub success: bool,
    pub error: Option<String>,
    pub data: RunData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<FillReport>,
}

impl RunResult {
    fn finish(user: UserData, init_time: i64, outcome: Result<FillReport>) -> Self {
        let last_time = now_millis();
        let data = RunData {
            user,
            init_time,
            last_time,
        };
        match outcome {
            Ok(report) => Self {
                success: true,
                error: None,
                data,
                report: Some(report),
            },
            Err(e) => Self {
                success: false,
                error: Some(e.to_string()),
                data,
                report: None,
            },
        }
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct SignupRunner {
    config: RunConfig,
}

impl SignupRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Launch a real browser and run against it. In interactive mode the
    /// session stays open until Ctrl-C.
    pub async fn run(&self, user: UserData) -> RunResult {
        let init_time = now_millis();
        log_user(&user);

        debug!(state = %RunState::Init, "launching browser");
        let session = match SignupSession::launch(&self.config.browser).await {
            Ok(session) => session,
            Err(e) => {
                error!("Error during signup: {e}");
                return RunResult::finish(user, init_time, Err(e));
            }
        };

        self.run_session(session, user, init_time, wait_for_interrupt())
            .await
    }

    /// Run against an already-open session.
    ///
    /// `review` is awaited only in interactive mode, after filling or failing,
    /// and the session is closed once it resolves. Unattended runs close
    /// straight away.
    pub async fn run_session<S, R>(
        &self,
        session: S,
        user: UserData,
        init_time: i64,
        review: R,
    ) -> RunResult
    where
        S: FormSession,
        R: Future<Output = ()>,
    {
        let outcome = self.prepare(&session, &user).await;
        match &outcome {
            Ok(report) => {
                info!("=== All fields processed ({} failed) ===", report.failed_fields().count());
                info!("Note: Submit button NOT clicked - manual review required");
            }
            Err(e) => error!("Error during signup: {e}"),
        }
        let result = RunResult::finish(user, init_time, outcome);

        if self.config.mode() == SessionMode::Interactive {
            debug!(state = %RunState::Review, "holding session open");
            info!("Browser will remain open for manual review. Press Ctrl+C to close when done.");
            review.await;
            info!("Closing browser...");
        }

        if let Err(e) = session.close().await {
            warn!("Failed to close browser session: {e}");
        }
        debug!(state = %RunState::Closed, "run finished");
        result
    }

    async fn prepare<S: FormSession>(&self, session: &S, user: &UserData) -> Result<FillReport> {
        session.navigate(&self.config.target_url).await?;
        tokio::time::sleep(self.config.settle_delay).await;
        debug!(state = %RunState::Navigated, url = %self.config.target_url);

        let timings = FillTimings {
            element_timeout: self.config.browser.element_timeout,
            field_pause: self.config.field_pause,
        };
        let report = fill_form(session, user, timings).await?;
        debug!(state = %RunState::LayoutDetected, layout = %report.layout);
        debug!(state = %RunState::FieldsFilled, birthday = report.birthday_filled);
        Ok(report)
    }
}

fn log_user(user: &UserData) {
    info!("=== Starting signup prefill ===");
    info!("First Name: {}", user.first_name);
    info!("Last Name: {}", user.last_name);
    info!("Email: {}", user.email);
    info!("ZIP Code: {}", user.zip_code);
    info!("Birthday: {}", user.birthday);
}

async fn wait_for_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Unable to listen for Ctrl+C, closing immediately: {e}");
    }
}
