//! Pathway service and the in-process call interface.
//!
//! `PathwayService` is what the presentation layer talks to: it owns the
//! repository exclusively and exposes the add/list/stats operations. Reads
//! borrow `&self` and the single write path takes `&mut self`, so the
//! single-writer contract of the core holds by construction: no locking is
//! involved and every read observes a consistent snapshot.

use crate::config::CoreConfig;
use crate::constants::DEFAULT_NEXT_ACTION;
use crate::error::{TriageResult, ValidationError};
use crate::listing::{derive, ListFilters};
use crate::patient::{Patient, PatientId, SeverityLevel, TreatmentStatus};
use crate::repository::PatientRepository;
use crate::stats::{compute_stats, StatsSummary};
use crate::triage::{classify_days, days_since_diagnosis};
use chrono::{DateTime, Utc};
use pathway_types::NonEmptyText;
use std::sync::Arc;

/// Input for admitting a new patient, as collected by the add-patient form.
///
/// Only `name` and `diagnosis_date` are required; everything else has a
/// creation default. The form carries no location field, so `location` is
/// normally `None` and the service stamps the configured home-office
/// location.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub diagnosis_date: Option<DateTime<Utc>>,
    pub severity: SeverityLevel,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, diagnosis_date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            diagnosis_date: Some(diagnosis_date),
            severity: SeverityLevel::Moderate,
            location: None,
            notes: None,
        }
    }
}

/// Pure patient data operations - no presentation concerns
pub struct PathwayService {
    cfg: Arc<CoreConfig>,
    repository: PatientRepository,
}

impl PathwayService {
    /// Creates a service over an empty repository.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            repository: PatientRepository::new(),
        }
    }

    /// Creates a service over pre-populated records (seed data, tests).
    pub fn with_patients(cfg: Arc<CoreConfig>, patients: Vec<Patient>) -> Self {
        Self {
            cfg,
            repository: PatientRepository::with_patients(patients),
        }
    }

    /// Admits a new patient using the current wall clock.
    ///
    /// See [`add_patient_at`](PathwayService::add_patient_at) for the
    /// deterministic-clock variant and the full contract.
    pub fn add_patient(&mut self, input: NewPatient) -> TriageResult<Patient> {
        self.add_patient_at(input, Utc::now())
    }

    /// Admits a new patient, deriving urgency and days-since-diagnosis
    /// against the supplied `now`.
    ///
    /// Both derived fields are computed here, once, and frozen on the record;
    /// the new patient is prepended to the repository and immediately visible
    /// to subsequent derivations. Status defaults to `Diagnosed` and the next
    /// action to the standard initial-consultation prompt.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] or
    /// [`ValidationError::MissingDiagnosisDate`] when a required field is
    /// absent. On error no partial record is created and the repository is
    /// left untouched.
    pub fn add_patient_at(
        &mut self,
        input: NewPatient,
        now: DateTime<Utc>,
    ) -> TriageResult<Patient> {
        let name = NonEmptyText::new(&input.name)?;
        let diagnosis_date = input
            .diagnosis_date
            .ok_or(ValidationError::MissingDiagnosisDate)?;

        let days = days_since_diagnosis(diagnosis_date, now);
        let urgency = classify_days(days);

        // An absent or blank location inherits the configured home office.
        let location = input
            .location
            .and_then(|value| NonEmptyText::new(value).ok())
            .unwrap_or_else(|| self.cfg.home_location().clone());

        let patient = Patient {
            id: PatientId::new(),
            name,
            diagnosis_date,
            severity: input.severity,
            urgency,
            status: TreatmentStatus::Diagnosed,
            days_since_diagnosis: days,
            location,
            next_action: Some(DEFAULT_NEXT_ACTION.to_owned()),
            scheduled_date: None,
            notes: input.notes,
        };

        tracing::info!(
            patient = %patient.id,
            urgency = %patient.urgency,
            days = patient.days_since_diagnosis,
            "patient admitted to pathway"
        );

        self.repository.add(patient.clone());
        Ok(patient)
    }

    /// The derived, ordered list for the current filter state.
    pub fn list_patients(&self, filters: &ListFilters) -> Vec<Patient> {
        derive(self.repository.all(), filters)
    }

    /// Stats over the raw repository, ignoring filters.
    ///
    /// This is the top-level header call pattern of the original; compare
    /// [`dashboard_stats`](PathwayService::dashboard_stats).
    pub fn registry_stats(&self) -> StatsSummary {
        compute_stats(self.repository.all())
    }

    /// Stats over the derived, filtered list.
    ///
    /// This is the dashboard panel call pattern of the original. Both call
    /// patterns are kept as distinct, named operations rather than collapsed.
    pub fn dashboard_stats(&self, filters: &ListFilters) -> StatsSummary {
        compute_stats(&self.list_patients(filters))
    }

    /// Detail-view lookup by identifier.
    pub fn patient(&self, id: &PatientId) -> Option<&Patient> {
        self.repository.get(id)
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }
}
