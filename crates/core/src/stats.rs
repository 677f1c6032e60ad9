//! Aggregate statistics over a patient list.
//!
//! A pure reduction used at two call sites: the top-level header (raw
//! repository contents) and the dashboard panel (the derived, filtered list).
//! Both are exposed as named operations on the service; this module only
//! knows how to reduce whatever slice it is given, including an empty one.

use crate::constants::CRITICAL_AFTER_DAYS;
use crate::patient::{Patient, TreatmentStatus, UrgencyLevel};
use serde::{Deserialize, Serialize};

/// Patient count for one facility location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

/// Summary counters reduced from a patient list.
///
/// All fields are plain integers; `average_days` and `conversion_rate` are
/// rounded to the nearest whole value and defined as 0 for an empty input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub diagnosed: usize,
    pub scheduled: usize,
    pub in_treatment: usize,
    pub completed: usize,
    /// Patients more than 90 days since diagnosis.
    pub at_risk: usize,
    /// Mean days since diagnosis, rounded to nearest.
    pub average_days: i64,
    /// Percentage of patients who started or completed treatment.
    pub conversion_rate: u32,
    /// Per-location counts in first-occurrence order of the input.
    pub by_location: Vec<LocationCount>,
}

impl StatsSummary {
    /// Patients requiring immediate action: critical plus high tier.
    pub fn needs_action(&self) -> usize {
        self.critical + self.high
    }

    /// Patients awaiting treatment start: diagnosed plus scheduled.
    pub fn pending_treatment(&self) -> usize {
        self.diagnosed + self.scheduled
    }
}

/// Reduces `patients` to a [`StatsSummary`] in one linear pass.
pub fn compute_stats(patients: &[Patient]) -> StatsSummary {
    let mut stats = StatsSummary {
        total: patients.len(),
        ..Default::default()
    };
    let mut total_days: i64 = 0;

    for patient in patients {
        match patient.urgency {
            UrgencyLevel::Critical => stats.critical += 1,
            UrgencyLevel::High => stats.high += 1,
            UrgencyLevel::Medium => stats.medium += 1,
            UrgencyLevel::Low => stats.low += 1,
        }
        match patient.status {
            TreatmentStatus::Diagnosed => stats.diagnosed += 1,
            TreatmentStatus::Scheduled => stats.scheduled += 1,
            TreatmentStatus::InTreatment => stats.in_treatment += 1,
            TreatmentStatus::Completed => stats.completed += 1,
        }
        if patient.days_since_diagnosis > CRITICAL_AFTER_DAYS {
            stats.at_risk += 1;
        }
        total_days += patient.days_since_diagnosis;

        match stats
            .by_location
            .iter_mut()
            .find(|entry| entry.location == patient.location.as_str())
        {
            Some(entry) => entry.count += 1,
            None => stats.by_location.push(LocationCount {
                location: patient.location.as_str().to_owned(),
                count: 1,
            }),
        }
    }

    if stats.total > 0 {
        stats.average_days = (total_days as f64 / stats.total as f64).round() as i64;
        let converted = stats.in_treatment + stats.completed;
        stats.conversion_rate = (converted as f64 * 100.0 / stats.total as f64).round() as u32;
    }

    stats
}
