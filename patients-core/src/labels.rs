//! Display label to API value mapping for the status and last-visit filters.
//!
//! Conversions are fallback-to-identity: a label or value outside the table
//! passes through unchanged rather than being dropped or rejected, so a stale
//! selection persisted in the URL survives a round trip.

use serde::{Deserialize, Serialize};

/// Patient record status as stored by the backend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PatientStatus {
    #[default]
    Active,
    Inactive,
    Critical,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 3] = [
        PatientStatus::Active,
        PatientStatus::Inactive,
        PatientStatus::Critical,
    ];

    /// Backend enum value, e.g. `active`.
    pub fn api(self) -> &'static str {
        match self {
            PatientStatus::Active => "active",
            PatientStatus::Inactive => "inactive",
            PatientStatus::Critical => "critical",
        }
    }

    /// Human-readable label, e.g. `Active`.
    pub fn display(self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Inactive => "Inactive",
            PatientStatus::Critical => "Critical",
        }
    }

    pub fn from_api(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.api() == value)
    }

    pub fn from_display(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.display() == label)
    }

    /// Badge variant used when rendering the status.
    pub fn variant(self) -> StatusVariant {
        match self {
            PatientStatus::Active => StatusVariant::Success,
            PatientStatus::Critical => StatusVariant::Destructive,
            PatientStatus::Inactive => StatusVariant::Secondary,
        }
    }
}

/// Visual badge variant for a patient status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusVariant {
    Success,
    Destructive,
    Secondary,
}

/// Relative "last visit" window offered by the list filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LastVisitRange {
    LastWeek,
    LastMonth,
    Last3Months,
    Last6Months,
    LastYear,
    OverYear,
}

impl LastVisitRange {
    pub const ALL: [LastVisitRange; 6] = [
        LastVisitRange::LastWeek,
        LastVisitRange::LastMonth,
        LastVisitRange::Last3Months,
        LastVisitRange::Last6Months,
        LastVisitRange::LastYear,
        LastVisitRange::OverYear,
    ];

    /// Backend query value, e.g. `last_3_months`.
    pub fn api(self) -> &'static str {
        match self {
            LastVisitRange::LastWeek => "last_week",
            LastVisitRange::LastMonth => "last_month",
            LastVisitRange::Last3Months => "last_3_months",
            LastVisitRange::Last6Months => "last_6_months",
            LastVisitRange::LastYear => "last_year",
            LastVisitRange::OverYear => "over_year",
        }
    }

    /// Human-readable label, e.g. `Last 3 Months`.
    pub fn display(self) -> &'static str {
        match self {
            LastVisitRange::LastWeek => "Last Week",
            LastVisitRange::LastMonth => "Last Month",
            LastVisitRange::Last3Months => "Last 3 Months",
            LastVisitRange::Last6Months => "Last 6 Months",
            LastVisitRange::LastYear => "Last Year",
            LastVisitRange::OverYear => "Over a Year Ago",
        }
    }

    pub fn from_api(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.api() == value)
    }

    pub fn from_display(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.display() == label)
    }
}

/// Map status display labels to backend values; unknown labels pass through.
pub fn convert_status_display_to_api(display_labels: &[String]) -> Vec<String> {
    display_labels
        .iter()
        .map(|label| match PatientStatus::from_display(label) {
            Some(status) => status.api().to_string(),
            None => label.clone(),
        })
        .collect()
}

/// Map backend status values to display labels; unknown values pass through.
pub fn convert_status_api_to_display(api_values: &[String]) -> Vec<String> {
    api_values
        .iter()
        .map(|value| match PatientStatus::from_api(value) {
            Some(status) => status.display().to_string(),
            None => value.clone(),
        })
        .collect()
}

/// Map last-visit display labels to backend values; unknown labels pass through.
pub fn convert_last_visit_display_to_api(display_labels: &[String]) -> Vec<String> {
    display_labels
        .iter()
        .map(|label| match LastVisitRange::from_display(label) {
            Some(range) => range.api().to_string(),
            None => label.clone(),
        })
        .collect()
}

/// Map backend last-visit values to display labels; unknown values pass through.
pub fn convert_last_visit_api_to_display(api_values: &[String]) -> Vec<String> {
    api_values
        .iter()
        .map(|value| match LastVisitRange::from_api(value) {
            Some(range) => range.display().to_string(),
            None => value.clone(),
        })
        .collect()
}
