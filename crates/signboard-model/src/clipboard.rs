use crate::fields::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The four physical clipboards the board replaces. Declaration order is
/// display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Clipboard {
    Rdo,
    AmSpare,
    PmSpare,
    ExtraWork,
}

impl Clipboard {
    pub const ALL: [Clipboard; 4] = [
        Clipboard::Rdo,
        Clipboard::AmSpare,
        Clipboard::PmSpare,
        Clipboard::ExtraWork,
    ];

    /// Stable token used in file names, paths, and the wire format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rdo => "rdo",
            Self::AmSpare => "am_spare",
            Self::PmSpare => "pm_spare",
            Self::ExtraWork => "extra_work",
        }
    }

    /// Human label shown on the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rdo => "RDO",
            Self::AmSpare => "AM Spare",
            Self::PmSpare => "PM Spare",
            Self::ExtraWork => "Extra Work",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let token = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == token)
            .ok_or_else(|| ValidationError(format!("unknown clipboard: {input}")))
    }
}

impl Display for Clipboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_parse() {
        for c in Clipboard::ALL {
            assert_eq!(Clipboard::parse(c.as_str()).expect("token"), c);
        }
        assert_eq!(
            Clipboard::parse("  AM_SPARE ").expect("case-insensitive"),
            Clipboard::AmSpare
        );
        assert!(Clipboard::parse("spare").is_err());
    }

    #[test]
    fn serde_uses_the_file_token() {
        let json = serde_json::to_string(&Clipboard::ExtraWork).expect("serialize");
        assert_eq!(json, "\"extra_work\"");
        let back: Clipboard = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Clipboard::ExtraWork);
    }

    #[test]
    fn display_order_matches_the_physical_board() {
        let labels: Vec<&str> = Clipboard::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["RDO", "AM Spare", "PM Spare", "Extra Work"]);
    }
}
