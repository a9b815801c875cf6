//! The identity record a run fills the form with.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// User data for one run. Field names follow the JSON payload accepted on
/// the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub zip_code: String,
    /// `MM/DD/YYYY`
    pub birthday: String,
}

/// A birthday split into the three values the dropdowns are keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayParts {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl BirthdayParts {
    /// Split on `/` into exactly three parts, keeping each part verbatim.
    pub fn split(birthday: &str) -> Result<Self> {
        let mut parts = birthday.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(month), Some(day), Some(year), None) => Ok(Self {
                month: month.to_string(),
                day: day.to_string(),
                year: year.to_string(),
            }),
            _ => Err(Error::InvalidUserData(format!(
                "birthday must have three '/'-separated parts, got {birthday:?}"
            ))),
        }
    }
}

impl UserData {
    /// Parse a JSON payload and validate it before anything touches the page.
    pub fn from_json(payload: &str) -> Result<Self> {
        let data: UserData = serde_json::from_str(payload)?;
        data.validate()?;
        Ok(data)
    }

    /// Names must be non-empty and the birthday must read as `MM/DD/YYYY`.
    /// The email is deliberately left unchecked.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(Error::InvalidUserData("firstName is empty".into()));
        }
        if self.last_name.trim().is_empty() {
            return Err(Error::InvalidUserData("lastName is empty".into()));
        }

        let parts = self.birthday_parts()?;
        let shaped = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
        if !(shaped(&parts.month, 2) && shaped(&parts.day, 2) && shaped(&parts.year, 4)) {
            return Err(Error::InvalidUserData(format!(
                "birthday must be MM/DD/YYYY, got {:?}",
                self.birthday
            )));
        }
        Ok(())
    }

    pub fn birthday_parts(&self) -> Result<BirthdayParts> {
        BirthdayParts::split(&self.birthday)
    }
}
