//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! service, rather than being read from process-wide environment variables
//! during request handling. The only setting this core needs is the active
//! home-office location, which scopes the office view and is stamped onto new
//! patients whose input carries no location.

use crate::constants::DEFAULT_HOME_LOCATION;
use crate::error::{TriageResult, ValidationError};
use crate::listing::{LocationFilter, Scope};
use pathway_types::NonEmptyText;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    home_location: NonEmptyText,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHomeLocation`] if the location is
    /// empty or whitespace-only.
    pub fn new(home_location: impl AsRef<str>) -> TriageResult<Self> {
        let home_location = NonEmptyText::new(home_location)
            .map_err(|_| ValidationError::InvalidHomeLocation)?;
        Ok(Self { home_location })
    }

    pub fn home_location(&self) -> &NonEmptyText {
        &self.home_location
    }

    /// Scope for the office view of the configured home location.
    pub fn office_scope(&self) -> Scope {
        Scope::Office {
            location: self.home_location.clone(),
        }
    }

    /// Scope for the national view, optionally narrowed to one location.
    pub fn national_scope(location: Option<String>) -> Scope {
        Scope::National {
            location: match location {
                Some(value) => LocationFilter::Only(value),
                None => LocationFilter::All,
            },
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            home_location: NonEmptyText::new(DEFAULT_HOME_LOCATION)
                .expect("default home location constant is non-empty"),
        }
    }
}

/// Resolve the home-office location from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, falls back to
/// [`DEFAULT_HOME_LOCATION`].
pub fn home_location_from_env_value(value: Option<String>) -> TriageResult<CoreConfig> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(location) => CoreConfig::new(location),
        None => Ok(CoreConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_non_empty_location() {
        let cfg = CoreConfig::new("Chicago, IL").expect("should accept");
        assert_eq!(cfg.home_location().as_str(), "Chicago, IL");
    }

    #[test]
    fn test_new_rejects_empty_location() {
        let err = CoreConfig::new("   ").expect_err("should reject");
        assert!(matches!(err, ValidationError::InvalidHomeLocation));
    }

    #[test]
    fn test_env_value_falls_back_to_default_when_absent_or_blank() {
        let cfg = home_location_from_env_value(None).unwrap();
        assert_eq!(cfg.home_location().as_str(), DEFAULT_HOME_LOCATION);

        let cfg = home_location_from_env_value(Some("  ".into())).unwrap();
        assert_eq!(cfg.home_location().as_str(), DEFAULT_HOME_LOCATION);
    }

    #[test]
    fn test_env_value_overrides_default() {
        let cfg = home_location_from_env_value(Some("Austin, TX".into())).unwrap();
        assert_eq!(cfg.home_location().as_str(), "Austin, TX");
    }

    #[test]
    fn test_office_scope_carries_home_location() {
        let cfg = CoreConfig::new("Austin, TX").unwrap();
        match cfg.office_scope() {
            Scope::Office { location } => assert_eq!(location.as_str(), "Austin, TX"),
            other => panic!("expected office scope, got {other:?}"),
        }
    }
}
