use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::locator::{FieldSelectors, Locator, DIRECT_FIELDS, MODAL_FIELDS};
use crate::surface::FormSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormLayout {
    Direct,
    Modal,
    Unknown,
}

impl FormLayout {
    /// The selector set every fill in this layout must use.
    pub fn fields(self) -> Option<&'static FieldSelectors> {
        match self {
            FormLayout::Direct => Some(&DIRECT_FIELDS),
            FormLayout::Modal => Some(&MODAL_FIELDS),
            FormLayout::Unknown => None,
        }
    }
}

impl fmt::Display for FormLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormLayout::Direct => "DIRECT",
            FormLayout::Modal => "MODAL",
            FormLayout::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Marker elements in priority order; the first one present decides.
pub const LAYOUT_PROBES: &[(Locator, FormLayout)] = &[
    (DIRECT_FIELDS.first_name, FormLayout::Direct),
    (MODAL_FIELDS.first_name, FormLayout::Modal),
];

/// Classify the loaded page against [`LAYOUT_PROBES`].
pub async fn detect_layout<S: FormSurface>(surface: &S) -> Result<FormLayout> {
    detect_with(surface, LAYOUT_PROBES).await
}

pub async fn detect_with<S: FormSurface>(
    surface: &S,
    probes: &[(Locator, FormLayout)],
) -> Result<FormLayout> {
    for (marker, layout) in probes {
        if surface.is_present(marker).await? {
            return Ok(*layout);
        }
    }
    Ok(FormLayout::Unknown)
}
