//! Canonical patient data model shared across the dashboard crates.
//!
//! Backend responses use snake_case keys and array-of-one nested entities,
//! while form state uses camelCase single objects. Everything downstream of
//! the normalizer consumes only the types defined here.

use serde::{Deserialize, Serialize};

pub mod filter;
pub mod labels;
pub mod options;

pub use filter::{has_active_filters, normalize_filter_values, FilterValue, PatientFilters, QueryFilters};
pub use labels::{
    convert_last_visit_api_to_display, convert_last_visit_display_to_api,
    convert_status_api_to_display, convert_status_display_to_api, LastVisitRange, PatientStatus,
    StatusVariant,
};

/// Canonical, UI-consumable patient record.
///
/// Optional nested sections are `None` (serialized as `null`) when the source
/// carried no data for them, so cards can skip rendering without probing keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPatientData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub address: Option<NormalizedAddress>,
    pub emergency_contact: Option<NormalizedEmergencyContact>,
    pub insurance: Option<NormalizedInsuranceInfo>,
    pub medical_info: Option<NormalizedMedicalInfo>,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInsuranceInfo {
    pub provider: String,
    pub policy_number: String,
    pub group_number: Option<String>,
    pub effective_date: String,
    pub expiration_date: Option<String>,
    pub copay: f64,
    pub deductible: f64,
}

/// Allergy, condition and medication lists are always present (possibly
/// empty); an empty list is a meaningful state, not missing data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMedicalInfo {
    pub allergies: Vec<String>,
    pub conditions: Vec<String>,
    pub current_medications: Vec<Medication>,
    pub blood_type: Option<String>,
    pub last_visit: Option<String>,
    pub status: PatientStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub prescribed_by: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_active: bool,
}

/// Uploaded patient document metadata, passed through from the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub name: String,
    #[serde(alias = "upload_date")]
    pub upload_date: String,
    #[serde(alias = "file_size")]
    pub file_size: f64,
    #[serde(alias = "mime_type")]
    pub mime_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    MedicalRecord,
    InsuranceCard,
    PhotoId,
    TestResult,
    #[default]
    #[serde(other)]
    Other,
}

/// Flat row for the patient table view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientListItem {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub status: PatientStatus,
    pub last_visit: Option<String>,
    pub blood_type: Option<String>,
    pub insurance_provider: String,
}

/// Projection backing the patient header card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientHeader {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
    pub date_of_birth: String,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
    pub phone: String,
    pub status: PatientStatus,
    pub status_variant: StatusVariant,
}

/// Error raised at the JSON parse boundary. Normalization itself is total and
/// never fails; malformed fields degrade to defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("failed to read patient JSON: {0}")]
    Parse(String),
}
