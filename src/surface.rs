//! The browser primitives the filler is written against.
//!
//! There is intentionally no click method: a surface can be read, typed
//! into and have its dropdowns set, but it cannot submit anything.
#![allow(async_fn_in_trait)]

use std::time::Duration;

use crate::error::Result;
use crate::locator::Locator;

pub trait FormSurface {
    /// Whether `locator` resolves right now, without waiting. A missing
    /// element is `Ok(false)`; a broken session is an error.
    async fn is_present(&self, locator: &Locator) -> Result<bool>;

    /// Wait until `locator` resolves, failing with `Error::Timeout` after `timeout`.
    async fn wait_for(&self, locator: &Locator, timeout: Duration) -> Result<()>;

    /// Remove any pre-filled content from an input.
    async fn clear(&self, locator: &Locator) -> Result<()>;

    /// Focus the input and simulate typing `text`.
    async fn type_text(&self, locator: &Locator, text: &str) -> Result<()>;

    /// Read the input's current `value` property.
    async fn value(&self, locator: &Locator) -> Result<String>;

    /// Choose the `<option>` whose value attribute equals `value`.
    async fn select_by_value(&self, locator: &Locator, value: &str) -> Result<()>;
}

/// A surface with a lifecycle: it can be navigated and torn down.
pub trait FormSession: FormSurface {
    async fn navigate(&self, url: &str) -> Result<()>;

    async fn close(self) -> Result<()>;
}
