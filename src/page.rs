use std::time::Duration;

use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page as CrPage;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::locator::Locator;

/// Polling interval while waiting for an element to appear.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Wrapper around a chromiumoxide Page that resolves [`Locator`]s.
pub struct Page {
    inner: CrPage,
}

impl Page {
    pub(crate) fn new(inner: CrPage) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying chromiumoxide Page.
    pub fn inner(&self) -> &CrPage {
        &self.inner
    }

    /// Navigate to the given URL and wait for the page to load.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;
        Ok(())
    }

    /// Resolve `locator` once, without waiting.
    ///
    /// A query the browser answered with "no such node" is `ElementNotFound`;
    /// transport or session failures stay `CdpError`.
    pub async fn find(&self, locator: &Locator) -> Result<Element> {
        let found = match locator {
            Locator::Css(selector) => self.inner.find_element(*selector).await,
            Locator::XPath(path) => self.inner.find_xpath(*path).await,
        };
        match found {
            Ok(el) => Ok(Element::new(el)),
            Err(e) if is_missing_node(&e) => Err(Error::ElementNotFound(format!("{locator}: {e}"))),
            Err(e) => Err(Error::CdpError(e)),
        }
    }

    /// Wait for `locator` to resolve, polling every 100ms up to `timeout`.
    pub async fn wait_for(&self, locator: &Locator, timeout: Duration) -> Result<Element> {
        let start = std::time::Instant::now();

        loop {
            match self.find(locator).await {
                Ok(el) => return Ok(el),
                Err(Error::ElementNotFound(_)) if start.elapsed() < timeout => {
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
                Err(Error::ElementNotFound(_)) => {
                    return Err(Error::Timeout(format!(
                        "{locator} after {}s",
                        timeout.as_secs_f32()
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Close the tab.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}

/// The browser answered, but with an error about the query itself.
fn is_missing_node(e: &CdpError) -> bool {
    matches!(e, CdpError::NotFound | CdpError::Chrome(_))
}
