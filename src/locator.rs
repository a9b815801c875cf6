//! Element locators and the selector sets for each known form layout.
//!
//! No submit or "sign up" control is listed here. The filler prepares the
//! form and stops; nothing in this crate can press the final button.

use std::fmt;

/// A query the browser resolves to a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locator {
    Css(&'static str),
    XPath(&'static str),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(s) => write!(f, "css={s}"),
            Locator::XPath(s) => write!(f, "xpath={s}"),
        }
    }
}

/// Locators for the five text inputs of one layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldSelectors {
    pub first_name: Locator,
    pub last_name: Locator,
    pub email: Locator,
    pub password: Locator,
    pub zip_code: Locator,
}

/// The form served with stable element ids.
pub const DIRECT_FIELDS: FieldSelectors = FieldSelectors {
    first_name: Locator::Css("#first_name"),
    last_name: Locator::Css("#last_name"),
    email: Locator::Css("#email"),
    password: Locator::Css("#password"),
    zip_code: Locator::Css("#zip"),
};

/// The "continue with email" modal, only reachable structurally.
pub const MODAL_FIELDS: FieldSelectors = FieldSelectors {
    first_name: Locator::XPath("//form//input[@type='text' and @placeholder='First Name']"),
    last_name: Locator::XPath("//form//input[@type='text' and @placeholder='Last Name']"),
    email: Locator::XPath("//form//input[@type='email' and @placeholder='Email']"),
    password: Locator::XPath("//form//input[@type='password' and @placeholder='Password']"),
    zip_code: Locator::XPath("//form//input[@name='zip' and @placeholder='ZIP Code']"),
};

pub const BIRTHDAY_MONTH: Locator = Locator::Css("select[name='birthday_month']");
pub const BIRTHDAY_DAY: Locator = Locator::Css("select[name='birthday_day']");
pub const BIRTHDAY_YEAR: Locator = Locator::Css("select[name='birthday_year']");
