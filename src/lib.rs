pub mod browser;
pub mod config;
pub mod element;
pub mod error;
pub mod filler;
pub mod generator;
pub mod layout;
pub mod locator;
pub mod page;
pub mod runner;
pub mod surface;
pub mod user_data;

pub use browser::SignupSession;
pub use config::{BrowserConfig, RunConfig, RunConfigBuilder, SessionMode};
pub use error::{Error, Result};
pub use filler::{fill_form, FieldOutcome, FillReport, FillTimings};
pub use layout::{detect_layout, FormLayout};
pub use runner::{RunResult, SignupRunner};
pub use surface::{FormSession, FormSurface};
pub use user_data::UserData;
