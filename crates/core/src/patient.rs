//! Patient record and its closed classification types.
//!
//! The original dashboard carried urgency, severity and treatment status as
//! loosely-typed string unions; here they are closed enums parsed once at the
//! boundary. Wire names (serde) match the original data shape so JSON output
//! is interchangeable with it.

use crate::error::UnknownVariantError;
use chrono::{DateTime, Utc};
use pathway_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique patient identifier, assigned at creation and never
/// reassigned.
///
/// Displays in canonical form: 32 lowercase hex characters, no hyphens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(Uuid);

impl PatientId {
    /// Allocates a fresh identifier for a new patient record.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PatientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Derived priority bucket driving flagging and the default sort order.
///
/// A monotonic function of days since diagnosis at creation time; see
/// [`crate::triage::classify_days`]. Independent of [`SeverityLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    /// Sort rank: critical(0) < high(1) < medium(2) < low(3).
    pub fn rank(self) -> u8 {
        match self {
            UrgencyLevel::Critical => 0,
            UrgencyLevel::High => 1,
            UrgencyLevel::Medium => 2,
            UrgencyLevel::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::High => "high",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Low => "low",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(UrgencyLevel::Critical),
            "high" => Ok(UrgencyLevel::High),
            "medium" => Ok(UrgencyLevel::Medium),
            "low" => Ok(UrgencyLevel::Low),
            other => Err(UnknownVariantError::new("urgency level", other)),
        }
    }
}

/// Clinical severity classification, independent of triage ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Mild,
    Moderate,
    Severe,
}

impl SeverityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(SeverityLevel::Mild),
            "moderate" => Ok(SeverityLevel::Moderate),
            "severe" => Ok(SeverityLevel::Severe),
            other => Err(UnknownVariantError::new("severity level", other)),
        }
    }
}

/// Where a patient sits in the treatment pipeline.
///
/// Defaults to `Diagnosed` on creation; advanced by downstream workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreatmentStatus {
    Diagnosed,
    Scheduled,
    InTreatment,
    Completed,
}

impl TreatmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TreatmentStatus::Diagnosed => "diagnosed",
            TreatmentStatus::Scheduled => "scheduled",
            TreatmentStatus::InTreatment => "in-treatment",
            TreatmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TreatmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreatmentStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diagnosed" => Ok(TreatmentStatus::Diagnosed),
            "scheduled" => Ok(TreatmentStatus::Scheduled),
            "in-treatment" => Ok(TreatmentStatus::InTreatment),
            "completed" => Ok(TreatmentStatus::Completed),
            other => Err(UnknownVariantError::new("treatment status", other)),
        }
    }
}

/// A patient record in the treatment pathway.
///
/// `urgency` and `days_since_diagnosis` are derived once at creation from the
/// diagnosis date and frozen thereafter; they do not advance as real time
/// passes. This reproduces the source system's freeze-at-creation semantics
/// and is a known staleness limitation, not an invitation to recompute live.
///
/// `days_since_diagnosis` may be negative when the diagnosis date lies in the
/// future; such records triage as `Low`.
///
/// Construct via [`crate::service::PathwayService::add_patient`] (or the seed
/// fixtures), which routes through the classifier so the two derived fields
/// never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: NonEmptyText,
    pub diagnosis_date: DateTime<Utc>,
    pub severity: SeverityLevel,
    pub urgency: UrgencyLevel,
    pub status: TreatmentStatus,
    pub days_since_diagnosis: i64,
    pub location: NonEmptyText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_rank_orders_critical_first() {
        assert!(UrgencyLevel::Critical.rank() < UrgencyLevel::High.rank());
        assert!(UrgencyLevel::High.rank() < UrgencyLevel::Medium.rank());
        assert!(UrgencyLevel::Medium.rank() < UrgencyLevel::Low.rank());
    }

    #[test]
    fn test_urgency_round_trips_through_from_str() {
        for level in [
            UrgencyLevel::Critical,
            UrgencyLevel::High,
            UrgencyLevel::Medium,
            UrgencyLevel::Low,
        ] {
            assert_eq!(level.as_str().parse::<UrgencyLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_urgency_rejects_unknown_value() {
        let err = "urgent".parse::<UrgencyLevel>().expect_err("should reject");
        assert!(err.to_string().contains("urgent"));
    }

    #[test]
    fn test_treatment_status_uses_kebab_case_wire_name() {
        let json = serde_json::to_string(&TreatmentStatus::InTreatment).unwrap();
        assert_eq!(json, "\"in-treatment\"");
        let parsed: TreatmentStatus = serde_json::from_str("\"in-treatment\"").unwrap();
        assert_eq!(parsed, TreatmentStatus::InTreatment);
    }

    #[test]
    fn test_severity_rejects_unknown_value() {
        assert!("extreme".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn test_patient_id_displays_canonical_32_hex() {
        let id = PatientId::new();
        let rendered = id.to_string();
        assert_eq!(rendered.len(), 32);
        assert!(rendered
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
