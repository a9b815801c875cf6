//! In-memory page used to drive the filler without a browser.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

use signup_prefill::locator::{
    FieldSelectors, Locator, BIRTHDAY_DAY, BIRTHDAY_MONTH, BIRTHDAY_YEAR, DIRECT_FIELDS,
    MODAL_FIELDS,
};
use signup_prefill::{Error, FormSession, FormSurface, Result, UserData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Navigate(String),
    Wait(Locator),
    Clear(Locator),
    Type(Locator, String),
    Select(Locator, String),
}

#[derive(Default)]
pub struct FakePage {
    present: HashSet<Locator>,
    values: RefCell<HashMap<Locator, String>>,
    /// Allowed option values per `<select>`.
    options: HashMap<Locator, Vec<String>>,
    pub calls: RefCell<Vec<Call>>,
    pub closed: Rc<Cell<bool>>,
    pub fail_navigation: bool,
    /// Every query fails as if the browser connection dropped.
    pub disconnected: bool,
}

impl FakePage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_fields(selectors: &FieldSelectors) -> Self {
        let mut page = Self::default();
        for locator in [
            selectors.first_name,
            selectors.last_name,
            selectors.email,
            selectors.password,
            selectors.zip_code,
        ] {
            page.present.insert(locator);
        }
        page
    }

    pub fn direct() -> Self {
        Self::with_fields(&DIRECT_FIELDS)
    }

    pub fn modal() -> Self {
        Self::with_fields(&MODAL_FIELDS)
    }

    /// Add birthday dropdowns offering every month, day 1-31 and years 1900-2030.
    pub fn with_birthday(mut self) -> Self {
        let two_digit = |n: u32| format!("{n:02}");
        self.add_select(BIRTHDAY_MONTH, (1..=12).map(two_digit).collect());
        self.add_select(BIRTHDAY_DAY, (1..=31).map(two_digit).collect());
        self.add_select(BIRTHDAY_YEAR, (1900..=2030).map(|y| y.to_string()).collect());
        self
    }

    pub fn add_select(&mut self, locator: Locator, options: Vec<String>) {
        self.present.insert(locator);
        self.options.insert(locator, options);
    }

    pub fn with_prefilled(self, locator: Locator, value: &str) -> Self {
        self.values.borrow_mut().insert(locator, value.to_string());
        self
    }

    pub fn without(mut self, locator: Locator) -> Self {
        self.present.remove(&locator);
        self
    }

    pub fn insert(mut self, locator: Locator) -> Self {
        self.present.insert(locator);
        self
    }

    pub fn value_of(&self, locator: &Locator) -> Option<String> {
        self.values.borrow().get(locator).cloned()
    }

    pub fn typed(&self) -> Vec<(Locator, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Type(l, v) => Some((*l, v.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn selected(&self) -> Vec<(Locator, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Select(l, v) => Some((*l, v.clone())),
                _ => None,
            })
            .collect()
    }

    fn require(&self, locator: &Locator) -> Result<()> {
        if self.present.contains(locator) {
            Ok(())
        } else {
            Err(Error::ElementNotFound(locator.to_string()))
        }
    }
}

impl FormSurface for FakePage {
    async fn is_present(&self, locator: &Locator) -> Result<bool> {
        if self.disconnected {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "browser connection closed",
            )));
        }
        Ok(self.present.contains(locator))
    }

    async fn wait_for(&self, locator: &Locator, _timeout: Duration) -> Result<()> {
        self.calls.borrow_mut().push(Call::Wait(*locator));
        self.require(locator)
            .map_err(|_| Error::Timeout(locator.to_string()))
    }

    async fn clear(&self, locator: &Locator) -> Result<()> {
        self.require(locator)?;
        self.calls.borrow_mut().push(Call::Clear(*locator));
        self.values.borrow_mut().insert(*locator, String::new());
        Ok(())
    }

    async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        self.require(locator)?;
        self.calls
            .borrow_mut()
            .push(Call::Type(*locator, text.to_string()));
        self.values
            .borrow_mut()
            .entry(*locator)
            .or_default()
            .push_str(text);
        Ok(())
    }

    async fn value(&self, locator: &Locator) -> Result<String> {
        self.require(locator)?;
        Ok(self.value_of(locator).unwrap_or_default())
    }

    async fn select_by_value(&self, locator: &Locator, value: &str) -> Result<()> {
        self.require(locator)?;
        let known = self
            .options
            .get(locator)
            .is_some_and(|opts| opts.iter().any(|o| o == value));
        if !known {
            return Err(Error::ElementNotFound(format!(
                "option {value} in {locator}"
            )));
        }
        self.calls
            .borrow_mut()
            .push(Call::Select(*locator, value.to_string()));
        self.values
            .borrow_mut()
            .insert(*locator, value.to_string());
        Ok(())
    }
}

/// Lets a test keep inspecting the page after the runner consumed its session.
pub struct SharedPage(pub Rc<FakePage>);

impl FormSurface for SharedPage {
    async fn is_present(&self, locator: &Locator) -> Result<bool> {
        self.0.is_present(locator).await
    }

    async fn wait_for(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        self.0.wait_for(locator, timeout).await
    }

    async fn clear(&self, locator: &Locator) -> Result<()> {
        self.0.clear(locator).await
    }

    async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        self.0.type_text(locator, text).await
    }

    async fn value(&self, locator: &Locator) -> Result<String> {
        self.0.value(locator).await
    }

    async fn select_by_value(&self, locator: &Locator, value: &str) -> Result<()> {
        self.0.select_by_value(locator, value).await
    }
}

impl FormSession for SharedPage {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.0.calls.borrow_mut().push(Call::Navigate(url.to_string()));
        if self.0.fail_navigation {
            return Err(Error::NavigationError(format!("net::ERR_NAME_NOT_RESOLVED at {url}")));
        }
        Ok(())
    }

    async fn close(self) -> Result<()> {
        self.0.closed.set(true);
        Ok(())
    }
}

pub fn ana() -> UserData {
    UserData {
        first_name: "Ana".into(),
        last_name: "Ruiz".into(),
        email: "ana@x.com".into(),
        password: "Pw12!".into(),
        zip_code: "10001".into(),
        birthday: "05/10/1990".into(),
    }
}
