use crate::fields::ValidationError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Length of the rolling signup window, today included.
pub const SIGNUP_WINDOW_DAYS: u64 = 7;

/// A calendar day a clipboard accepts signups for. Canonical form is the
/// ISO `YYYY-MM-DD` string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlotDate(NaiveDate);

impl SlotDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError(format!("date must be YYYY-MM-DD, got {s:?}")))
    }

    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn iso_string(self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Board label, e.g. `Monday, 08/10`.
    #[must_use]
    pub fn label(self) -> String {
        self.0.format("%A, %m/%d").to_string()
    }
}

impl Display for SlotDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// The dates offered for signup: `today` through `today + 6`, ascending.
#[must_use]
pub fn signup_window(today: NaiveDate) -> Vec<SlotDate> {
    (0..SIGNUP_WINDOW_DAYS)
        .filter_map(|i| today.checked_add_days(Days::new(i)))
        .map(SlotDate)
        .collect()
}

/// Whether `date` is inside the window anchored at `today`.
#[must_use]
pub fn window_contains(today: NaiveDate, date: SlotDate) -> bool {
    let d = date.as_naive();
    d >= today
        && today
            .checked_add_days(Days::new(SIGNUP_WINDOW_DAYS))
            .is_some_and(|end| d < end)
}
