#![forbid(unsafe_code)]
//! Signboard model SSOT.
//!
//! ```compile_fail
//! use signboard_model::Clipboard;
//!
//! fn exhaustive_match(c: Clipboard) -> &'static str {
//!     match c {
//!         Clipboard::Rdo => "r",
//!         Clipboard::AmSpare => "a",
//!         Clipboard::PmSpare => "p",
//!     }
//! }
//! ```

mod clipboard;
mod date;
mod fields;
mod record;
mod slot;
mod time;

pub use clipboard::Clipboard;
pub use date::{signup_window, window_contains, SlotDate, SIGNUP_WINDOW_DAYS};
pub use fields::{
    normalize_notes, parse_operator_id, parse_operator_name, parse_phone, OperatorId,
    OperatorName, Phone, ValidationError, ID_MAX_LEN, NAME_MAX_LEN, NOTES_MAX_LEN, PHONE_MAX_LEN,
};
pub use record::{SignupDraft, SignupRecord};
pub use slot::Slot;
pub use time::{BoardClock, FixedClock, SystemClock};

pub const CRATE_NAME: &str = "signboard-model";
