//! Random identities built from local word lists.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::user_data::UserData;

pub const FIRST_NAMES_FILE: &str = "names.txt";
pub const LAST_NAMES_FILE: &str = "lastname.txt";
pub const MAIL_PROVIDERS_FILE: &str = "mailproviders.txt";
pub const ZIP_CODES_FILE: &str = "uszip.txt";

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 65;
/// Every month has at least this many days.
pub const MAX_BIRTH_DAY: u32 = 28;

#[derive(Debug, Clone, Default)]
pub struct WordLists {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub mail_providers: Vec<String>,
    pub zip_codes: Vec<String>,
}

impl WordLists {
    /// Load the four lists from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            first_names: load_word_list(dir.join(FIRST_NAMES_FILE))?,
            last_names: load_word_list(dir.join(LAST_NAMES_FILE))?,
            mail_providers: load_word_list(dir.join(MAIL_PROVIDERS_FILE))?,
            zip_codes: load_word_list(dir.join(ZIP_CODES_FILE))?,
        })
    }
}

/// One value per line; lines are trimmed and blank ones dropped.
pub fn load_word_list(path: impl Into<PathBuf>) -> Result<Vec<String>> {
    let path = path.into();
    let text = std::fs::read_to_string(&path).map_err(|source| Error::WordList {
        path: path.clone(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, list: &'a [String], name: &str) -> Result<&'a str> {
    list.choose(rng)
        .map(String::as_str)
        .ok_or_else(|| Error::EmptyWordList(name.to_string()))
}

/// Build a plausible identity whose birthday lies 18 to 65 years before `today`.
pub fn generate_user_data<R: Rng + ?Sized>(
    lists: &WordLists,
    rng: &mut R,
    today: NaiveDate,
) -> Result<UserData> {
    let first_name = pick(rng, &lists.first_names, "first names")?;
    let last_name = pick(rng, &lists.last_names, "last names")?;
    let provider = pick(rng, &lists.mail_providers, "mail providers")?;
    let zip_code = pick(rng, &lists.zip_codes, "zip codes")?;

    let email = format!(
        "{}.{}{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.gen_range(100..=999),
        provider
    );
    let password = format!("Pass{}!", rng.gen_range(1000..=9999));

    let year = today.year() - rng.gen_range(MIN_AGE..=MAX_AGE);
    let month = rng.gen_range(1..=12u32);
    let day = rng.gen_range(1..=MAX_BIRTH_DAY);

    Ok(UserData {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email,
        password,
        zip_code: zip_code.to_string(),
        birthday: format!("{month:02}/{day:02}/{year}"),
    })
}
