//! In-memory patient repository.
//!
//! Holds the ordered sequence of patient records, newest-first. The
//! repository is exclusively owned by its controlling service; derivation and
//! stats functions borrow its contents rather than reaching for ambient
//! global state. No removal or update operation exists; downstream status
//! changes mutate an owned record, not the repository.

use crate::patient::{Patient, PatientId};

/// Ordered in-memory collection of patient records, newest-first.
#[derive(Debug, Default, Clone)]
pub struct PatientRepository {
    patients: Vec<Patient>,
}

impl PatientRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `patients`, preserving their order as-is.
    ///
    /// Callers supplying seed data are expected to hand over the sequence
    /// already in newest-first order.
    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// Prepends a patient, making it immediately visible to subsequent
    /// derivations as the newest record.
    pub fn add(&mut self, patient: Patient) {
        tracing::debug!(patient = %patient.id, "patient added to repository");
        self.patients.insert(0, patient);
    }

    /// Returns the full sequence, insertion order preserved (newest-first).
    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    /// Looks up a patient by identifier.
    pub fn get(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_patients;
    use chrono::Utc;

    #[test]
    fn test_add_prepends_newest_first() {
        let now = Utc::now();
        let mut patients = sample_patients(now).into_iter();
        let first = patients.next().unwrap();
        let second = patients.next().unwrap();

        let mut repo = PatientRepository::new();
        repo.add(first.clone());
        repo.add(second.clone());

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.all()[0].id, second.id);
        assert_eq!(repo.all()[1].id, first.id);
    }

    #[test]
    fn test_get_finds_patient_by_id() {
        let repo = PatientRepository::with_patients(sample_patients(Utc::now()));
        let wanted = repo.all()[2].id;
        let found = repo.get(&wanted).expect("should find patient");
        assert_eq!(found.id, wanted);
    }

    #[test]
    fn test_get_returns_none_for_unknown_id() {
        let repo = PatientRepository::with_patients(sample_patients(Utc::now()));
        assert!(repo.get(&crate::patient::PatientId::new()).is_none());
    }

    #[test]
    fn test_empty_repository_reports_empty() {
        let repo = PatientRepository::new();
        assert!(repo.is_empty());
        assert!(repo.all().is_empty());
    }
}
