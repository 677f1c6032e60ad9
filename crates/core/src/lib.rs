//! # Pathway Core
//!
//! Core business logic for the care pathway tracker.
//!
//! This crate contains pure data operations for tracking patients through a
//! treatment pathway:
//! - Urgency triage classification from days since diagnosis
//! - An in-memory, newest-first patient repository
//! - The filter/sort list derivation pipeline
//! - Aggregate statistics for the dashboard header and panel
//!
//! **No presentation concerns**: rendering, form handling and user input
//! collection belong to the consuming front end (see the `pathway-cli`
//! crate), which parses its loosely-typed input into this crate's closed
//! filter and classification types at the boundary.

pub mod config;
pub mod constants;
pub mod error;
pub mod listing;
pub mod patient;
pub mod repository;
pub mod seed;
pub mod service;
pub mod stats;
pub mod triage;

pub use config::{home_location_from_env_value, CoreConfig};
pub use error::{TriageResult, UnknownVariantError, ValidationError};
pub use listing::{derive, ListFilters, LocationFilter, Scope, SortKey, UrgencyFilter, ViewMode};
pub use patient::{Patient, PatientId, SeverityLevel, TreatmentStatus, UrgencyLevel};
pub use pathway_types::NonEmptyText;
pub use repository::PatientRepository;
pub use service::{NewPatient, PathwayService};
pub use stats::{compute_stats, LocationCount, StatsSummary};
