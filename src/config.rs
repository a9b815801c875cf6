use std::time::Duration;

/// Default page the filler navigates to.
pub const DEFAULT_SIGNUP_URL: &str = "https://www.yelp.com/signup";

pub struct BrowserConfig {
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub chrome_path: Option<String>,
    /// How long a field lookup may wait for its element to appear (default: 30s).
    pub element_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: false,
            window_width: 1280,
            window_height: 800,
            chrome_path: None,
            element_timeout: Duration::from_secs(30),
        }
    }
}

/// What happens to the session once the form has been prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Keep the browser open for manual review until interrupted.
    Interactive,
    /// Tear the browser down as soon as filling ends, whatever the outcome.
    Unattended,
}

impl SessionMode {
    /// Headless runs have nobody to review the form, so they never linger.
    pub fn for_headless(headless: bool) -> Self {
        if headless {
            SessionMode::Unattended
        } else {
            SessionMode::Interactive
        }
    }
}

pub struct RunConfig {
    pub browser: BrowserConfig,
    pub target_url: String,
    /// Delay after navigation before the layout is inspected.
    pub settle_delay: Duration,
    /// Pause between clearing a field and typing into it.
    pub field_pause: Duration,
}

impl RunConfig {
    pub fn mode(&self) -> SessionMode {
        SessionMode::for_headless(self.browser.headless)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            browser: BrowserConfig::default(),
            target_url: DEFAULT_SIGNUP_URL.to_string(),
            settle_delay: Duration::from_secs(2),
            field_pause: Duration::from_millis(100),
        }
    }
}

pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.config.browser.headless = headless;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.config.browser.window_width = width;
        self.config.browser.window_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<String>) -> Self {
        self.config.browser.chrome_path = Some(path.into());
        self
    }

    /// Set how long each field lookup waits for its element.
    pub fn element_timeout(mut self, timeout: Duration) -> Self {
        self.config.browser.element_timeout = timeout;
        self
    }

    pub fn target_url(mut self, url: impl Into<String>) -> Self {
        self.config.target_url = url.into();
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.config.settle_delay = delay;
        self
    }

    pub fn field_pause(mut self, pause: Duration) -> Self {
        self.config.field_pause = pause;
        self
    }

    pub fn build(self) -> RunConfig {
        self.config
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_signup_run() {
        let config = RunConfig::default();
        assert_eq!(config.target_url, DEFAULT_SIGNUP_URL);
        assert_eq!(config.browser.window_width, 1280);
        assert_eq!(config.browser.window_height, 800);
        assert_eq!(config.browser.element_timeout, Duration::from_secs(30));
        assert_eq!(config.mode(), SessionMode::Interactive);
    }

    #[test]
    fn headless_builds_an_unattended_run() {
        let config = RunConfigBuilder::new()
            .headless(true)
            .element_timeout(Duration::from_secs(5))
            .target_url("http://localhost:8080/signup")
            .window_size(1024, 768)
            .build();
        assert_eq!(config.mode(), SessionMode::Unattended);
        assert_eq!(config.browser.element_timeout, Duration::from_secs(5));
        assert_eq!(config.target_url, "http://localhost:8080/signup");
        assert_eq!(config.browser.window_width, 1024);
        assert_eq!(config.browser.window_height, 768);
    }
}
