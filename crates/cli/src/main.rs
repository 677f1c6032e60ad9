//! Care pathway tracker CLI.
//!
//! A thin presentation layer over `pathway-core`: it seeds the in-memory
//! service with the sample data set, parses loosely-typed flag values into
//! the core's closed filter types at this boundary, and prints the derived
//! list or statistics. State lives only for the duration of one invocation;
//! the core deliberately has no persistence layer.

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use pathway_core::{
    home_location_from_env_value, seed::sample_patients, CoreConfig, ListFilters, NewPatient,
    PathwayService, Scope, SeverityLevel, SortKey, UrgencyFilter, ViewMode,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pathway")]
#[command(about = "Care pathway tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Case-insensitive substring match on patient name
    #[arg(long, default_value = "")]
    search: String,
    /// Urgency filter: all, critical, high, medium or low
    #[arg(long, default_value = "all")]
    urgency: String,
    /// View mode: national or office
    #[arg(long, default_value = "national")]
    view: String,
    /// Location: narrows the national view, or selects the office
    #[arg(long)]
    location: Option<String>,
    /// Sort key: urgency, days or name
    #[arg(long, default_value = "urgency")]
    sort: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients under the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit the derived list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Admit a new patient
    Add {
        /// Patient name
        name: String,
        /// Diagnosis date (YYYY-MM-DD)
        diagnosis_date: String,
        /// Severity level: mild, moderate or severe
        #[arg(long, default_value = "moderate")]
        severity: String,
        /// Facility location (defaults to the configured home office)
        #[arg(long)]
        location: Option<String>,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show aggregate statistics
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
        /// Compute over the filtered list (dashboard panel) instead of the
        /// whole registry (header)
        #[arg(long)]
        filtered: bool,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses the loosely-typed flag values into the core's typed filter state.
fn build_filters(args: &FilterArgs, cfg: &CoreConfig) -> anyhow::Result<ListFilters> {
    let urgency: UrgencyFilter = args
        .urgency
        .parse()
        .with_context(|| format!("invalid --urgency '{}'", args.urgency))?;
    let sort: SortKey = args
        .sort
        .parse()
        .with_context(|| format!("invalid --sort '{}'", args.sort))?;
    let view: ViewMode = args
        .view
        .parse()
        .with_context(|| format!("invalid --view '{}'", args.view))?;

    let scope = match view {
        ViewMode::National => CoreConfig::national_scope(args.location.clone()),
        ViewMode::Office => match &args.location {
            Some(location) => Scope::Office {
                location: location
                    .parse()
                    .context("--location cannot be empty in office view")?,
            },
            None => cfg.office_scope(),
        },
    };

    Ok(ListFilters {
        search_text: args.search.clone(),
        urgency,
        scope,
        sort,
    })
}

/// Parses a YYYY-MM-DD form value into a UTC timestamp at midnight.
fn parse_diagnosis_date(value: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid diagnosis date '{value}' (expected YYYY-MM-DD)"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

fn print_patients(patients: &[pathway_core::Patient]) {
    if patients.is_empty() {
        println!("No patients found matching your criteria");
        return;
    }
    for patient in patients {
        // Width specs only pad primitive formatters, so pass the &str forms.
        println!(
            "{}  {:<22} urgency: {:<8} days: {:>4}  status: {:<12} location: {}",
            patient.id,
            patient.name.as_str(),
            patient.urgency.as_str(),
            patient.days_since_diagnosis,
            patient.status.as_str(),
            patient.location.as_str(),
        );
    }
}

fn print_stats(stats: &pathway_core::StatsSummary) {
    println!("Total patients:      {}", stats.total);
    println!(
        "By urgency:          critical {} / high {} / medium {} / low {}",
        stats.critical, stats.high, stats.medium, stats.low
    );
    println!(
        "By status:           diagnosed {} / scheduled {} / in-treatment {} / completed {}",
        stats.diagnosed, stats.scheduled, stats.in_treatment, stats.completed
    );
    println!("Needs action:        {}", stats.needs_action());
    println!("At risk (>90d):      {}", stats.at_risk);
    println!("Pending treatment:   {}", stats.pending_treatment());
    println!("Average days:        {}", stats.average_days);
    println!("Conversion rate:     {}%", stats.conversion_rate);
    if !stats.by_location.is_empty() {
        println!("By location:");
        for entry in &stats.by_location {
            println!("  {:<20} {}", entry.location, entry.count);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathway_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let cfg = home_location_from_env_value(
        std::env::var(pathway_core::constants::HOME_LOCATION_ENV).ok(),
    )?;
    let cfg = std::sync::Arc::new(cfg);

    let now = Utc::now();
    let mut service = PathwayService::with_patients(cfg.clone(), sample_patients(now));

    match cli.command {
        Commands::List { filters, json } => {
            let filters = build_filters(&filters, &cfg)?;
            let patients = service.list_patients(&filters);
            if json {
                println!("{}", serde_json::to_string_pretty(&patients)?);
            } else {
                print_patients(&patients);
            }
        }
        Commands::Add {
            name,
            diagnosis_date,
            severity,
            location,
            notes,
        } => {
            let severity: SeverityLevel = severity
                .parse()
                .with_context(|| format!("invalid --severity '{severity}'"))?;
            let input = NewPatient {
                name,
                diagnosis_date: Some(parse_diagnosis_date(&diagnosis_date)?),
                severity,
                location,
                notes,
            };
            match service.add_patient_at(input, now) {
                Ok(patient) => {
                    println!(
                        "Admitted patient {} ({}, urgency: {}, {} days since diagnosis)",
                        patient.id, patient.name, patient.urgency, patient.days_since_diagnosis
                    );
                }
                Err(e) => eprintln!("Error admitting patient: {e}"),
            }
        }
        Commands::Stats {
            filters,
            filtered,
            json,
        } => {
            let stats = if filtered {
                let filters = build_filters(&filters, &cfg)?;
                service.dashboard_stats(&filters)
            } else {
                service.registry_stats()
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
    }

    Ok(())
}
