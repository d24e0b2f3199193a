//! Consistency checks across the compiled-in tables

use std::collections::HashSet;
use std::hash::Hash;

use edu_dashboard_shared::{DashboardError, DashboardResult};
use serde::Serialize;

use crate::complaints::{
    self, COMPLAINTS_BY_MONTH, COMPLAINTS_BY_REGION, COMPLAINTS_BY_STATUS, COMPLAINTS_SUMMARY,
    COMPLAINT_STATUSES, REGIONS,
};
use crate::education::{CAREERS_IN_DEMAND, INSTITUTIONS};
use crate::portfolio::PROJECTS;

#[derive(Debug, Clone, Serialize)]
pub struct DatasetValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl DatasetValidationResult {
    pub fn into_result(self) -> DashboardResult<Self> {
        if self.is_valid {
            Ok(self)
        } else {
            Err(DashboardError::DatasetValidation {
                errors: self.errors,
                warnings: self.warnings,
            })
        }
    }
}

/// Check key uniqueness and cross-table agreement
///
/// Detail tables that do not add up to the published summary are reported as
/// warnings; the data is kept as published.
pub fn validate_datasets() -> DatasetValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_unique("region code", REGIONS.iter().map(|r| r.code), &mut errors);
    check_unique("status code", COMPLAINT_STATUSES.iter().map(|s| s.code), &mut errors);
    check_unique(
        "region row code",
        COMPLAINTS_BY_REGION.iter().map(|r| r.code),
        &mut errors,
    );
    check_unique(
        "status row code",
        COMPLAINTS_BY_STATUS.iter().map(|r| r.code),
        &mut errors,
    );
    check_unique("month", COMPLAINTS_BY_MONTH.iter().map(|m| m.month), &mut errors);
    check_unique("institution id", INSTITUTIONS.iter().map(|i| i.id), &mut errors);
    check_unique("career", CAREERS_IN_DEMAND.iter().map(|c| c.career), &mut errors);
    check_unique("project id", PROJECTS.iter().map(|p| p.id), &mut errors);

    for row in COMPLAINTS_BY_REGION.iter() {
        match complaints::region_name(row.code) {
            Some(name) if name == row.region => {}
            Some(name) => errors.push(format!(
                "Region row {} is labelled {:?} but the region map says {:?}",
                row.code, row.region, name
            )),
            None => errors.push(format!("Region row has unknown code {}", row.code)),
        }
    }

    for row in COMPLAINTS_BY_STATUS.iter() {
        if complaints::status_name(row.code) != Some(row.status) {
            errors.push(format!(
                "Status row {} ({:?}) does not match the status map",
                row.code, row.status
            ));
        }
    }

    for row in COMPLAINTS_BY_MONTH.iter() {
        if complaints::month_name(row.month) != Some(row.month_name) {
            errors.push(format!(
                "Month row {} is labelled {:?}",
                row.month, row.month_name
            ));
        }
    }

    let expected = COMPLAINTS_SUMMARY.total_complaints;
    let totals = [
        ("region", complaints::total_by_region()),
        ("ambit", complaints::total_by_ambit()),
        ("status", complaints::total_by_status()),
        ("month", complaints::total_by_month()),
    ];
    for (table, total) in totals {
        if total != expected {
            warnings.push(format!(
                "Complaints by {} sum to {} but the summary reports {}",
                table, total, expected
            ));
        }
    }

    for warning in &warnings {
        log::warn!("{}", warning);
    }
    for error in &errors {
        log::error!("{}", error);
    }

    DatasetValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_unique<K>(what: &str, keys: impl Iterator<Item = K>, errors: &mut Vec<String>)
where
    K: Eq + Hash + std::fmt::Debug,
{
    let mut seen = HashSet::new();
    for key in keys {
        if seen.contains(&key) {
            errors.push(format!("Duplicate {} {:?}", what, key));
        } else {
            seen.insert(key);
        }
    }
}
