//! Filter-state reconciliation between UI controls and the list query.
//!
//! Multi-select controls emit either a single string or an array per
//! dimension. The query-parameter builder only understands the canonical
//! array-or-absent form, where an empty array means the same as no value.

use serde::{Deserialize, Serialize};

/// Raw value emitted by a filter control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

/// Filter selections as they arrive from the UI, one slot per dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientFilters {
    pub insurance_provider: Option<FilterValue>,
    pub current_medications: Option<FilterValue>,
    pub conditions: Option<FilterValue>,
    pub allergies: Option<FilterValue>,
    pub blood_type: Option<FilterValue>,
    pub last_visit: Option<FilterValue>,
    pub status: Option<FilterValue>,
}

/// Canonical shape consumed by the query-parameter builder. Absent slots are
/// skipped on serialization so they never reach the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_medications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
}

/// Reconcile every dimension into the canonical array-or-absent form.
pub fn normalize_filter_values(filters: &PatientFilters) -> QueryFilters {
    QueryFilters {
        insurance_provider: normalize_value(filters.insurance_provider.as_ref()),
        current_medications: normalize_value(filters.current_medications.as_ref()),
        conditions: normalize_value(filters.conditions.as_ref()),
        allergies: normalize_value(filters.allergies.as_ref()),
        blood_type: normalize_value(filters.blood_type.as_ref()),
        last_visit: normalize_value(filters.last_visit.as_ref()),
        status: normalize_value(filters.status.as_ref()),
    }
}

/// True when the search box or any filter dimension would constrain the list,
/// used to enable the "Clear All" action.
pub fn has_active_filters(filters: &PatientFilters, search_input: &str) -> bool {
    if !search_input.is_empty() {
        return true;
    }

    is_active(filters.insurance_provider.as_ref())
        || is_active(filters.allergies.as_ref())
        || is_active(filters.current_medications.as_ref())
        || is_active(filters.conditions.as_ref())
        || is_active(filters.blood_type.as_ref())
        || is_active(filters.last_visit.as_ref())
        || is_active(filters.status.as_ref())
}

fn normalize_value(value: Option<&FilterValue>) -> Option<Vec<String>> {
    match value? {
        FilterValue::One(single) if single.is_empty() => None,
        FilterValue::One(single) => Some(vec![single.clone()]),
        FilterValue::Many(values) if values.is_empty() => None,
        FilterValue::Many(values) => Some(values.clone()),
    }
}

fn is_active(value: Option<&FilterValue>) -> bool {
    match value {
        Some(FilterValue::One(single)) => !single.is_empty(),
        Some(FilterValue::Many(values)) => !values.is_empty(),
        None => false,
    }
}
