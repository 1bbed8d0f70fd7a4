// SPDX-License-Identifier: Apache-2.0

use signboard_model::Slot;
use std::path::{Path, PathBuf};

pub const SLOT_FILE_EXT: &str = "json";

/// `{clipboard}_{date}.json`, the on-disk name of a slot's record file.
#[must_use]
pub fn slot_file_name(slot: &Slot) -> String {
    format!("{}.{SLOT_FILE_EXT}", slot.file_stem())
}

#[must_use]
pub fn slot_path(root: &Path, slot: &Slot) -> PathBuf {
    root.join(slot_file_name(slot))
}

/// Staging path for the atomic rename on append.
#[must_use]
pub fn slot_tmp_path(root: &Path, slot: &Slot) -> PathBuf {
    root.join(format!("{}.{SLOT_FILE_EXT}.tmp", slot.file_stem()))
}

/// Inverse of [`slot_file_name`]. Foreign files yield `None`.
#[must_use]
pub fn parse_slot_file_name(name: &str) -> Option<Slot> {
    let stem = name.strip_suffix(".json")?;
    Slot::parse_file_stem(stem).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use signboard_model::{Clipboard, SlotDate};

    #[test]
    fn slot_file_names_round_trip() {
        let slot = Slot::new(
            Clipboard::PmSpare,
            SlotDate::parse("2026-08-08").expect("date"),
        );
        let name = slot_file_name(&slot);
        assert_eq!(name, "pm_spare_2026-08-08.json");
        assert_eq!(parse_slot_file_name(&name), Some(slot));
    }

    #[test]
    fn foreign_files_are_not_slots() {
        assert_eq!(parse_slot_file_name("README.md"), None);
        assert_eq!(parse_slot_file_name("rdo_2026-08-08.json.tmp"), None);
        assert_eq!(parse_slot_file_name("notes_2026-08-08.json"), None);
    }
}
