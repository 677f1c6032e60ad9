//! Sample patient fixtures.
//!
//! The four-record data set the original dashboard ships with, used to seed
//! the CLI's in-memory service and as shared test data. Diagnosis dates are
//! computed backwards from the supplied `now`, and urgency is derived through
//! the classifier so the fixture obeys the same creation invariant as real
//! records.

use crate::patient::{Patient, PatientId, SeverityLevel, TreatmentStatus};
use crate::triage::classify_days;
use chrono::{DateTime, Duration, Utc};
use pathway_types::NonEmptyText;

struct SeedRecord {
    name: &'static str,
    days_since_diagnosis: i64,
    severity: SeverityLevel,
    status: TreatmentStatus,
    location: &'static str,
    next_action: &'static str,
    scheduled_in_days: Option<i64>,
    notes: Option<&'static str>,
}

const SEED_RECORDS: [SeedRecord; 4] = [
    SeedRecord {
        name: "Margaret Johnson",
        days_since_diagnosis: 95,
        severity: SeverityLevel::Severe,
        status: TreatmentStatus::Diagnosed,
        location: "Boston, MA",
        next_action: "URGENT: Schedule infusion appointment immediately",
        scheduled_in_days: None,
        notes: Some("Family contacted but no response yet"),
    },
    SeedRecord {
        name: "Robert Chen",
        days_since_diagnosis: 72,
        severity: SeverityLevel::Moderate,
        status: TreatmentStatus::Scheduled,
        location: "Chicago, IL",
        next_action: "Confirm appointment scheduled for next week",
        scheduled_in_days: Some(7),
        notes: None,
    },
    SeedRecord {
        name: "Patricia Williams",
        days_since_diagnosis: 45,
        severity: SeverityLevel::Moderate,
        status: TreatmentStatus::Scheduled,
        location: "Boston, MA",
        next_action: "Follow up on insurance authorization",
        scheduled_in_days: Some(3),
        notes: None,
    },
    SeedRecord {
        name: "James Martinez",
        days_since_diagnosis: 20,
        severity: SeverityLevel::Mild,
        status: TreatmentStatus::InTreatment,
        location: "Austin, TX",
        next_action: "Monitor progress and schedule follow-up",
        scheduled_in_days: None,
        notes: None,
    },
];

/// The sample data set, newest-first as the repository expects, anchored at
/// `now`.
pub fn sample_patients(now: DateTime<Utc>) -> Vec<Patient> {
    SEED_RECORDS
        .iter()
        .map(|record| Patient {
            id: PatientId::new(),
            name: NonEmptyText::new(record.name).expect("fixture name is non-empty"),
            diagnosis_date: now - Duration::days(record.days_since_diagnosis),
            severity: record.severity,
            urgency: classify_days(record.days_since_diagnosis),
            status: record.status,
            days_since_diagnosis: record.days_since_diagnosis,
            location: NonEmptyText::new(record.location).expect("fixture location is non-empty"),
            next_action: Some(record.next_action.to_owned()),
            scheduled_date: record
                .scheduled_in_days
                .map(|days| now + Duration::days(days)),
            notes: record.notes.map(str::to_owned),
        })
        .collect()
}
