//! List derivation pipeline.
//!
//! Turns the repository's contents plus the current filter state into the
//! derived list shown to the user: search, urgency filter, office/national
//! scoping, then a stable sort. The pipeline is a pure function: it never
//! mutates its input and is re-evaluated from scratch on every state change,
//! so re-running it is always safe.
//!
//! Filter state is carried as closed enum types rather than the loosely-typed
//! strings of the original page; user input is parsed into these types once,
//! at the boundary where it enters the system.

use crate::error::UnknownVariantError;
use crate::patient::{Patient, UrgencyLevel};
use pathway_types::NonEmptyText;
use std::str::FromStr;

/// Urgency filter: everything, or a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrgencyFilter {
    #[default]
    All,
    Only(UrgencyLevel),
}

impl UrgencyFilter {
    fn matches(self, patient: &Patient) -> bool {
        match self {
            UrgencyFilter::All => true,
            UrgencyFilter::Only(level) => patient.urgency == level,
        }
    }
}

impl FromStr for UrgencyFilter {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(UrgencyFilter::All);
        }
        s.parse::<UrgencyLevel>().map(UrgencyFilter::Only)
    }
}

/// Location filter used within the national view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Only(String),
}

/// Scope selector: national (all locations, optionally filtered down to one)
/// or office (always exactly one location).
///
/// Office mode carries its location in the variant itself, so a
/// single-location view cannot be constructed without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    National { location: LocationFilter },
    Office { location: NonEmptyText },
}

impl Scope {
    fn matches(&self, patient: &Patient) -> bool {
        match self {
            Scope::National {
                location: LocationFilter::All,
            } => true,
            Scope::National {
                location: LocationFilter::Only(wanted),
            } => patient.location.as_str() == wanted,
            Scope::Office { location } => patient.location == *location,
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::National {
            location: LocationFilter::All,
        }
    }
}

/// View-mode flag as supplied by the user, before a [`Scope`] is built from
/// it at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    National,
    Office,
}

impl FromStr for ViewMode {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "national" => Ok(ViewMode::National),
            "office" => Ok(ViewMode::Office),
            other => Err(UnknownVariantError::new("view mode", other)),
        }
    }
}

/// Sort ordering for the derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Urgency rank ascending: critical first.
    #[default]
    Urgency,
    /// Days since diagnosis, descending.
    Days,
    /// Name, case-folded lexicographic ascending.
    Name,
}

impl FromStr for SortKey {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgency" => Ok(SortKey::Urgency),
            "days" => Ok(SortKey::Days),
            "name" => Ok(SortKey::Name),
            other => Err(UnknownVariantError::new("sort key", other)),
        }
    }
}

/// Complete filter state for one derivation.
///
/// `Default` mirrors the original page's initial state: empty search, all
/// urgencies, national view over all locations, sorted by urgency.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListFilters {
    pub search_text: String,
    pub urgency: UrgencyFilter,
    pub scope: Scope,
    pub sort: SortKey,
}

/// Derives the display list from `patients` under `filters`.
///
/// Steps apply in fixed order: case-insensitive substring search on name
/// (empty search matches everything), urgency filter, scope filter, stable
/// sort. Returns a new sequence; the input is never mutated. Applying the
/// same filters to the function's own output yields the same sequence.
pub fn derive(patients: &[Patient], filters: &ListFilters) -> Vec<Patient> {
    let needle = filters.search_text.to_lowercase();

    let mut derived: Vec<Patient> = patients
        .iter()
        .filter(|p| needle.is_empty() || p.name.as_str().to_lowercase().contains(&needle))
        .filter(|p| filters.urgency.matches(p))
        .filter(|p| filters.scope.matches(p))
        .cloned()
        .collect();

    // Vec::sort_by* is stable, so equal-key records keep their relative
    // repository order.
    match filters.sort {
        SortKey::Urgency => derived.sort_by_key(|p| p.urgency.rank()),
        SortKey::Days => derived.sort_by(|a, b| b.days_since_diagnosis.cmp(&a.days_since_diagnosis)),
        SortKey::Name => derived.sort_by_cached_key(|p| p.name.as_str().to_lowercase()),
    }

    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_patients;
    use chrono::Utc;

    fn fixture() -> Vec<Patient> {
        sample_patients(Utc::now())
    }

    fn names(patients: &[Patient]) -> Vec<&str> {
        patients.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_filters_keep_everything_sorted_by_urgency() {
        let patients = fixture();
        let derived = derive(&patients, &ListFilters::default());
        assert_eq!(derived.len(), patients.len());
        assert_eq!(
            names(&derived),
            vec![
                "Margaret Johnson", // critical, 95 days
                "Robert Chen",      // high, 72 days
                "Patricia Williams", // medium, 45 days
                "James Martinez",   // low, 20 days
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let patients = fixture();
        let filters = ListFilters {
            search_text: "cHeN".into(),
            ..Default::default()
        };
        assert_eq!(names(&derive(&patients, &filters)), vec!["Robert Chen"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let patients = fixture();
        let filters = ListFilters {
            search_text: String::new(),
            ..Default::default()
        };
        assert_eq!(derive(&patients, &filters).len(), patients.len());
    }

    #[test]
    fn test_urgency_filter_keeps_only_matching_tier() {
        let patients = fixture();
        let filters = ListFilters {
            urgency: UrgencyFilter::Only(UrgencyLevel::Critical),
            ..Default::default()
        };
        let derived = derive(&patients, &filters);
        assert_eq!(names(&derived), vec!["Margaret Johnson"]);
        assert_eq!(derived[0].days_since_diagnosis, 95);
    }

    #[test]
    fn test_national_view_with_location_filter_restricts_to_exact_match() {
        let patients = fixture();
        let filters = ListFilters {
            scope: Scope::National {
                location: LocationFilter::Only("Chicago, IL".into()),
            },
            ..Default::default()
        };
        let derived = derive(&patients, &filters);
        assert!(derived.iter().all(|p| p.location.as_str() == "Chicago, IL"));
        assert_eq!(derived.len(), 1);
    }

    #[test]
    fn test_office_view_restricts_to_single_location_even_with_urgency_all() {
        let patients = fixture();
        let filters = ListFilters {
            urgency: UrgencyFilter::All,
            scope: Scope::Office {
                location: "Boston, MA".parse().unwrap(),
            },
            ..Default::default()
        };
        let derived = derive(&patients, &filters);
        assert!(!derived.is_empty());
        assert!(derived.iter().all(|p| p.location.as_str() == "Boston, MA"));
    }

    #[test]
    fn test_sort_by_days_is_descending() {
        let patients = fixture();
        let filters = ListFilters {
            sort: SortKey::Days,
            ..Default::default()
        };
        let days: Vec<i64> = derive(&patients, &filters)
            .iter()
            .map(|p| p.days_since_diagnosis)
            .collect();
        assert_eq!(days, vec![95, 72, 45, 20]);
    }

    #[test]
    fn test_sort_by_name_is_case_folded_ascending() {
        let patients = fixture();
        let filters = ListFilters {
            sort: SortKey::Name,
            ..Default::default()
        };
        assert_eq!(
            names(&derive(&patients, &filters)),
            vec![
                "James Martinez",
                "Margaret Johnson",
                "Patricia Williams",
                "Robert Chen",
            ]
        );
    }

    #[test]
    fn test_urgency_sort_is_stable_for_equal_ranks() {
        // Two additional low-urgency patients; both tie with James Martinez.
        let mut patients = fixture();
        let mut extra_a = patients[3].clone();
        extra_a.name = "Zoe Adams".parse().unwrap();
        extra_a.id = crate::patient::PatientId::new();
        let mut extra_b = patients[3].clone();
        extra_b.name = "Amir Khan".parse().unwrap();
        extra_b.id = crate::patient::PatientId::new();
        patients.push(extra_a);
        patients.push(extra_b);

        let derived = derive(&patients, &ListFilters::default());
        let lows: Vec<&str> = derived
            .iter()
            .filter(|p| p.urgency == UrgencyLevel::Low)
            .map(|p| p.name.as_str())
            .collect();
        // Relative input order among equal ranks is unchanged.
        assert_eq!(lows, vec!["James Martinez", "Zoe Adams", "Amir Khan"]);
    }

    #[test]
    fn test_derive_is_idempotent_over_its_own_output() {
        let patients = fixture();
        let filters = ListFilters {
            search_text: "a".into(),
            sort: SortKey::Name,
            ..Default::default()
        };
        let once = derive(&patients, &filters);
        let twice = derive(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_derive_does_not_mutate_input() {
        let patients = fixture();
        let before = patients.clone();
        let filters = ListFilters {
            sort: SortKey::Name,
            ..Default::default()
        };
        let _ = derive(&patients, &filters);
        assert_eq!(patients, before);
    }

    #[test]
    fn test_filter_parsing_accepts_known_values() {
        assert_eq!("all".parse::<UrgencyFilter>().unwrap(), UrgencyFilter::All);
        assert_eq!(
            "critical".parse::<UrgencyFilter>().unwrap(),
            UrgencyFilter::Only(UrgencyLevel::Critical)
        );
        assert_eq!("days".parse::<SortKey>().unwrap(), SortKey::Days);
        assert_eq!("office".parse::<ViewMode>().unwrap(), ViewMode::Office);
    }

    #[test]
    fn test_filter_parsing_rejects_unknown_values() {
        assert!("urgent".parse::<UrgencyFilter>().is_err());
        assert!("date".parse::<SortKey>().is_err());
        assert!("regional".parse::<ViewMode>().is_err());
    }
}
