//! Writes a [`UserData`] record into whichever form layout the page shows.
//!
//! Each field is filled independently and best-effort: a missing or stuck
//! element is logged and recorded, never raised. Only an unrecognised
//! layout stops the fill.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::layout::{detect_layout, FormLayout};
use crate::locator::{Locator, BIRTHDAY_DAY, BIRTHDAY_MONTH, BIRTHDAY_YEAR};
use crate::surface::FormSurface;
use crate::user_data::UserData;

/// Waits used while filling.
#[derive(Debug, Clone, Copy)]
pub struct FillTimings {
    pub element_timeout: Duration,
    pub field_pause: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub field: &'static str,
    pub filled: bool,
    /// Value read back from the element after typing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FillReport {
    pub layout: FormLayout,
    pub fields: Vec<FieldOutcome>,
    pub birthday_filled: bool,
}

impl FillReport {
    pub fn failed_fields(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.fields.iter().filter(|f| !f.filled)
    }
}

fn loggable<'a>(field: &str, value: &'a str) -> &'a str {
    if field == "Password" {
        "********"
    } else {
        value
    }
}

/// Wait for the element, clear it, pause, type `value`, then read it back.
pub async fn fill_field<S: FormSurface>(
    surface: &S,
    locator: &Locator,
    value: &str,
    field: &'static str,
    timings: FillTimings,
) -> FieldOutcome {
    info!("Filling {field} with: {}", loggable(field, value));

    let attempt = async {
        surface.wait_for(locator, timings.element_timeout).await?;
        surface.clear(locator).await?;
        tokio::time::sleep(timings.field_pause).await;
        surface.type_text(locator, value).await?;
        surface.value(locator).await
    };

    match attempt.await {
        Ok(actual) => {
            info!("✓ {field}: {}", loggable(field, &actual));
            FieldOutcome {
                field,
                filled: true,
                value: Some(actual),
                error: None,
            }
        }
        Err(e) => {
            warn!("✗ Failed to fill {field}: {e}");
            FieldOutcome {
                field,
                filled: false,
                value: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Select month, day and year by option value. Absent dropdowns are not an error
/// for the run; the outcome is only logged and reported.
pub async fn fill_birthday<S: FormSurface>(
    surface: &S,
    birthday: &str,
    timings: FillTimings,
) -> bool {
    let attempt = async {
        let parts = crate::user_data::BirthdayParts::split(birthday)?;
        for (locator, value, label) in [
            (BIRTHDAY_MONTH, &parts.month, "month"),
            (BIRTHDAY_DAY, &parts.day, "day"),
            (BIRTHDAY_YEAR, &parts.year, "year"),
        ] {
            surface.wait_for(&locator, timings.element_timeout).await?;
            surface.select_by_value(&locator, value).await?;
            info!("✓ Selected {label}: {value}");
        }
        Ok::<_, Error>(())
    };

    match attempt.await {
        Ok(()) => true,
        Err(e) => {
            warn!("⚠ Birthday fields not found or not required: {e}");
            false
        }
    }
}

/// Detect the layout once, then fill every field with that layout's selectors.
///
/// Returns `Error::UnknownFormType` without touching any field when neither
/// layout is recognised, and the session's own error if it cannot be queried.
pub async fn fill_form<S: FormSurface>(
    surface: &S,
    user: &UserData,
    timings: FillTimings,
) -> Result<FillReport> {
    let layout = detect_layout(surface).await?;
    info!("Form type detected: {layout}");

    let selectors = layout.fields().ok_or(Error::UnknownFormType)?;

    let plan = [
        (&selectors.first_name, user.first_name.as_str(), "First Name"),
        (&selectors.last_name, user.last_name.as_str(), "Last Name"),
        (&selectors.email, user.email.as_str(), "Email"),
        (&selectors.password, user.password.as_str(), "Password"),
        (&selectors.zip_code, user.zip_code.as_str(), "ZIP Code"),
    ];

    let mut fields = Vec::with_capacity(plan.len());
    for (locator, value, name) in plan {
        fields.push(fill_field(surface, locator, value, name, timings).await);
    }
    let birthday_filled = fill_birthday(surface, &user.birthday, timings).await;

    Ok(FillReport {
        layout,
        fields,
        birthday_filled,
    })
}
