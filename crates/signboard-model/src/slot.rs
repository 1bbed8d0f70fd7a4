use crate::clipboard::Clipboard;
use crate::date::SlotDate;
use crate::fields::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A `(clipboard, date)` pair; each slot owns exactly one storage file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct Slot {
    pub clipboard: Clipboard,
    pub date: SlotDate,
}

impl Slot {
    #[must_use]
    pub const fn new(clipboard: Clipboard, date: SlotDate) -> Self {
        Self { clipboard, date }
    }

    /// `rdo/2026-08-07` form, used in logs and the API.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        format!("{}/{}", self.clipboard.as_str(), self.date)
    }

    /// `rdo_2026-08-07` form; the slot file is `<stem>.json`.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.clipboard.as_str(), self.date)
    }

    pub fn from_canonical_string(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let (clipboard, date) = trimmed.split_once('/').ok_or_else(|| {
            ValidationError("slot canonical form must be clipboard/date".to_string())
        })?;
        Ok(Self {
            clipboard: Clipboard::parse(clipboard)?,
            date: SlotDate::parse(date)?,
        })
    }

    /// Inverse of [`Slot::file_stem`]. The date never contains `_`, so the
    /// last underscore is always the separator.
    pub fn parse_file_stem(stem: &str) -> Result<Self, ValidationError> {
        let (clipboard, date) = stem
            .rsplit_once('_')
            .ok_or_else(|| ValidationError(format!("malformed slot file stem: {stem}")))?;
        Ok(Self {
            clipboard: Clipboard::parse(clipboard)?,
            date: SlotDate::parse(date)?,
        })
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}
