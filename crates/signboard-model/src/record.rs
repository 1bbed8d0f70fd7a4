use crate::fields::{
    normalize_notes, OperatorId, OperatorName, Phone, ValidationError,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One signed line on a clipboard. Records are append-only within a slot
/// file; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupRecord {
    pub name: OperatorName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<OperatorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    pub signed_up_at: DateTime<FixedOffset>,
}

/// Raw submitted fields, as they arrive from the form or the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupDraft {
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub operator_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl SignupDraft {
    /// Validate every field and stamp the record. Optional fields that are
    /// present but blank collapse to absent.
    pub fn into_record(
        self,
        signed_up_at: DateTime<FixedOffset>,
    ) -> Result<SignupRecord, ValidationError> {
        let name = OperatorName::parse(&self.name)?;
        let notes = match self.notes.as_deref() {
            Some(raw) => normalize_notes(raw)?,
            None => None,
        };
        let operator_id = match self.operator_id.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(raw) => Some(OperatorId::parse(raw)?),
        };
        let phone = match self.phone.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(raw) => Some(Phone::parse(raw)?),
        };
        Ok(SignupRecord {
            name,
            notes,
            operator_id,
            phone,
            signed_up_at,
        })
    }
}
