//! Urgency triage classification.
//!
//! Maps a diagnosis date to an urgency tier by elapsed whole days. The
//! classification is total: any pair of dates produces a tier and no error is
//! ever raised. Future-dated diagnoses yield negative day counts, which fall
//! through to [`UrgencyLevel::Low`], which is accepted source behaviour and
//! deliberately not corrected here.

use crate::constants::{CRITICAL_AFTER_DAYS, HIGH_AFTER_DAYS, MEDIUM_AFTER_DAYS};
use crate::patient::UrgencyLevel;
use chrono::{DateTime, Utc};

/// Whole days elapsed between diagnosis and `now`, truncating toward zero.
pub fn days_since_diagnosis(diagnosis_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(diagnosis_date).num_days()
}

/// Classifies a diagnosis date against `now`.
///
/// Equivalent to [`classify_days`] over [`days_since_diagnosis`].
pub fn classify(diagnosis_date: DateTime<Utc>, now: DateTime<Utc>) -> UrgencyLevel {
    classify_days(days_since_diagnosis(diagnosis_date, now))
}

/// Applies the ordered triage thresholds to a day count; first match wins.
///
/// - more than 90 days → `Critical`
/// - more than 60 days → `High`
/// - more than 30 days → `Medium`
/// - otherwise (including negative counts) → `Low`
pub fn classify_days(days: i64) -> UrgencyLevel {
    if days > CRITICAL_AFTER_DAYS {
        UrgencyLevel::Critical
    } else if days > HIGH_AFTER_DAYS {
        UrgencyLevel::High
    } else if days > MEDIUM_AFTER_DAYS {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}
