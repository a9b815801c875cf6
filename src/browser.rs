use std::time::Duration;

use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;
use tracing::debug;

use crate::config::BrowserConfig;
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::page::Page;
use crate::surface::{FormSession, FormSurface};

/// Chrome flags applied to every session.
const BASE_ARGS: &[&str] = &[
    "disable-dev-shm-usage",
    "disable-extensions",
    "mute-audio",
    "no-default-browser-check",
    "no-first-run",
];

/// One browser process with the single tab the form is filled in.
pub struct SignupSession {
    browser: CrBrowser,
    page: Page,
    handler_task: tokio::task::JoinHandle<()>,
}

impl SignupSession {
    /// Launch a browser with the given configuration and open a blank tab.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder();

        if config.headless {
            builder = builder.new_headless_mode().no_sandbox();
        } else {
            builder = builder.with_head().no_sandbox();
        }

        // chromiumoxide adds the `--` prefix itself
        for arg in BASE_ARGS {
            builder = builder.arg(*arg);
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder = builder
            .window_size(config.window_width, config.window_height)
            .viewport(Viewport {
                width: config.window_width,
                height: config.window_height,
                device_scale_factor: None,
                emulating_mobile: false,
                is_landscape: false,
                has_touch: false,
            });

        let cr_config = builder.build().map_err(Error::LaunchError)?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        let cr_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        debug!(
            headless = config.headless,
            width = config.window_width,
            height = config.window_height,
            "browser session started"
        );

        Ok(Self {
            browser,
            page: Page::new(cr_page),
            handler_task,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

impl FormSurface for SignupSession {
    async fn is_present(&self, locator: &Locator) -> Result<bool> {
        match self.page.find(locator).await {
            Ok(_) => Ok(true),
            Err(Error::ElementNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn wait_for(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        self.page.wait_for(locator, timeout).await.map(|_| ())
    }

    async fn clear(&self, locator: &Locator) -> Result<()> {
        self.page.find(locator).await?.clear().await
    }

    async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        self.page.find(locator).await?.type_text(text).await
    }

    async fn value(&self, locator: &Locator) -> Result<String> {
        self.page.find(locator).await?.value().await
    }

    async fn select_by_value(&self, locator: &Locator, value: &str) -> Result<()> {
        self.page.find(locator).await?.select_by_value(value).await
    }
}

impl FormSession for SignupSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.page.goto(url).await
    }

    async fn close(self) -> Result<()> {
        let Self {
            mut browser,
            page,
            handler_task,
        } = self;

        if let Err(e) = page.close().await {
            debug!("closing tab failed: {e}");
        }
        browser.close().await?;
        browser.wait().await?;
        handler_task.abort();
        debug!("browser session closed");
        Ok(())
    }
}
