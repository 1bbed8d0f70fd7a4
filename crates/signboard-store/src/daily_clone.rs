// SPDX-License-Identifier: Apache-2.0

use crate::backend::{StoreError, StoreErrorCode};
use signboard_model::SlotDate;
use std::fs;
use std::path::PathBuf;

/// One duplicate of `template` per calendar day in `start..=end`, written
/// into `dest_dir` and named by the ISO date.
#[derive(Debug, Clone)]
pub struct CloneJob {
    pub template: PathBuf,
    pub dest_dir: PathBuf,
    pub start: SlotDate,
    pub end: SlotDate,
}

#[derive(Debug, Clone, Default)]
pub struct CloneReport {
    pub created: Vec<PathBuf>,
}

/// Strictly sequential; stops permanently on the first copy error, leaving
/// earlier copies in place. Existing targets are overwritten.
pub fn clone_daily(job: &CloneJob) -> Result<CloneReport, StoreError> {
    if job.start > job.end {
        return Err(StoreError::new(
            StoreErrorCode::Validation,
            format!("start {} is after end {}", job.start, job.end),
        ));
    }
    if !job.template.is_file() {
        return Err(StoreError::new(
            StoreErrorCode::NotFound,
            format!("template not found: {}", job.template.display()),
        ));
    }
    fs::create_dir_all(&job.dest_dir)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;

    let ext = job.template.extension().and_then(|e| e.to_str());
    let mut report = CloneReport::default();
    let mut day = job.start.as_naive();
    let end = job.end.as_naive();
    while day <= end {
        let mut name = day.format("%Y-%m-%d").to_string();
        if let Some(ext) = ext {
            name.push('.');
            name.push_str(ext);
        }
        let target = job.dest_dir.join(&name);
        fs::copy(&job.template, &target).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Io,
                format!("copy to {} failed: {e}", target.display()),
            )
        })?;
        report.created.push(target);
        day = day
            .succ_opt()
            .ok_or_else(|| StoreError::new(StoreErrorCode::Internal, "date overflow"))?;
    }
    Ok(report)
}
