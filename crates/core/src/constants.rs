//! Constants used throughout the pathway core crate.
//!
//! Triage thresholds and creation-time defaults live here so the classifier,
//! stats computer and service all agree on the same figures.

/// Days since diagnosis beyond which a patient is triaged `Critical`.
///
/// Also the threshold for the "at risk" stats counter.
pub const CRITICAL_AFTER_DAYS: i64 = 90;

/// Days since diagnosis beyond which a patient is triaged `High`.
pub const HIGH_AFTER_DAYS: i64 = 60;

/// Days since diagnosis beyond which a patient is triaged `Medium`.
pub const MEDIUM_AFTER_DAYS: i64 = 30;

/// Next action stamped on every newly admitted patient.
pub const DEFAULT_NEXT_ACTION: &str = "Schedule initial consultation";

/// Home office location used when no explicit location is configured.
pub const DEFAULT_HOME_LOCATION: &str = "Boston, MA";

/// Environment variable consulted for the home office location.
pub const HOME_LOCATION_ENV: &str = "PATHWAY_HOME_LOCATION";
