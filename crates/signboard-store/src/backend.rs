// SPDX-License-Identifier: Apache-2.0

use crate::paths::{parse_slot_file_name, slot_path, slot_tmp_path};
use signboard_model::{SignupRecord, Slot};
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    NotFound,
    Validation,
    Io,
    Internal,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation_error",
            Self::Io => "io_error",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// Persistence seam for slot record files.
pub trait SlotStore {
    /// Records for a slot, in insertion order. A slot with no file yet is
    /// an empty list, not an error.
    fn load(&self, slot: &Slot) -> Result<Vec<SignupRecord>, StoreError>;

    /// Append one record and return the new record count.
    fn append(&self, slot: &Slot, record: SignupRecord) -> Result<usize, StoreError>;

    fn exists(&self, slot: &Slot) -> Result<bool, StoreError>;

    /// Every slot with a record file under the root, sorted. Files that do
    /// not look like slot files are ignored.
    fn list_slots(&self) -> Result<Vec<Slot>, StoreError>;
}

/// Flat-directory store: `<root>/<clipboard>_<date>.json`, each holding a
/// JSON array of records.
pub struct LocalFsStore {
    root: PathBuf,
}

impl LocalFsStore {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_records(&self, path: &Path) -> Result<Vec<SignupRecord>, StoreError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Validation,
                format!("corrupt slot file {}: {e}", path.display()),
            )
        })
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut file = fs::File::create(path)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    file.write_all(bytes)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    file.sync_all()
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))
}

impl SlotStore for LocalFsStore {
    fn load(&self, slot: &Slot) -> Result<Vec<SignupRecord>, StoreError> {
        let path = slot_path(&self.root, slot);
        if !path.exists() {
            return Ok(Vec::new());
        }
        self.read_records(&path)
    }

    fn append(&self, slot: &Slot, record: SignupRecord) -> Result<usize, StoreError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;

        let mut records = self.load(slot)?;
        records.push(record);

        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|e| StoreError::new(StoreErrorCode::Internal, e.to_string()))?;

        // Stage then rename so a crash never leaves a half-written slot file.
        let tmp = slot_tmp_path(&self.root, slot);
        write_and_sync(&tmp, &bytes)?;
        fs::rename(&tmp, slot_path(&self.root, slot))
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;

        Ok(records.len())
    }

    fn exists(&self, slot: &Slot) -> Result<bool, StoreError> {
        Ok(slot_path(&self.root, slot).exists())
    }

    fn list_slots(&self) -> Result<Vec<Slot>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.root)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        let mut slots = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
            let name = entry.file_name();
            if let Some(slot) = name.to_str().and_then(parse_slot_file_name) {
                slots.push(slot);
            }
        }
        slots.sort();
        Ok(slots)
    }
}
