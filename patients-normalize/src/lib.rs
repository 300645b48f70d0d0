//! Patient JSON to canonical `NormalizedPatientData` converter.
//!
//! Accepts records in either naming convention: the API returns snake_case
//! keys with nested entities as arrays (`addresses: [...]`), while form state
//! uses camelCase keys with single nested objects. When both spellings of a
//! field are present, the camelCase one wins, so a record partially updated
//! by the UI keeps its edits. Every function below the parse boundary is
//! total; missing or wrong-typed fields degrade to defaults instead of
//! failing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use patients_core::{
    Document, Medication, NormalizeError, NormalizedAddress, NormalizedEmergencyContact,
    NormalizedInsuranceInfo, NormalizedMedicalInfo, NormalizedPatientData, PatientHeader,
    PatientListItem, PatientStatus,
};
use serde_json::Value;

/// Normalize a patient record from a JSON string.
pub fn normalize_patient_str(patient_json: &str) -> Result<NormalizedPatientData, NormalizeError> {
    let value: Value =
        serde_json::from_str(patient_json).map_err(|err| NormalizeError::Parse(err.to_string()))?;
    Ok(normalize_patient_value(&value))
}

/// Normalize a patient record from a `serde_json::Value`.
pub fn normalize_patient_value(patient: &Value) -> NormalizedPatientData {
    let id = match patient.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    };

    let first_name = string_field(patient, "firstName", "first_name");
    let last_name = string_field(patient, "lastName", "last_name");
    let date_of_birth = string_field(patient, "dateOfBirth", "date_of_birth");
    let email = string_field(patient, "email", "email");
    let phone = string_field(patient, "phone", "phone");

    let address = present(patient, "address")
        .or_else(|| first_element(patient, "addresses"))
        .and_then(normalize_address);

    let emergency_contact = present(patient, "emergencyContact")
        .or_else(|| first_element(patient, "emergency_contacts"))
        .and_then(normalize_emergency_contact);

    let insurance = present(patient, "insurance")
        .or_else(|| first_element(patient, "insurance_info"))
        .and_then(normalize_insurance_info);

    let medical_info = present(patient, "medicalInfo")
        .or_else(|| present(patient, "medical_info"))
        .and_then(normalize_medical_info);

    let documents = patient
        .get("documents")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<Document>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    NormalizedPatientData {
        id,
        first_name,
        last_name,
        date_of_birth,
        email,
        phone,
        address,
        emergency_contact,
        insurance,
        medical_info,
        documents,
    }
}

/// Normalize an address from either shape. Collapses to `None` when street,
/// city, state and zip code are all empty, so no empty card is rendered.
pub fn normalize_address(address: &Value) -> Option<NormalizedAddress> {
    if address.is_null() {
        return None;
    }

    let street = string_field(address, "street", "street");
    let city = string_field(address, "city", "city");
    let state = string_field(address, "state", "state");
    let zip_code = string_field(address, "zipCode", "zip_code");
    let country =
        optional_string_field(address, "country", "country").filter(|country| !country.is_empty());

    if street.is_empty() && city.is_empty() && state.is_empty() && zip_code.is_empty() {
        return None;
    }

    Some(NormalizedAddress {
        street,
        city,
        state,
        zip_code,
        country,
    })
}

/// Normalize an emergency contact from either shape. Collapses to `None`
/// when name, relationship and phone are all empty.
pub fn normalize_emergency_contact(contact: &Value) -> Option<NormalizedEmergencyContact> {
    if contact.is_null() {
        return None;
    }

    let name = string_field(contact, "name", "name");
    let relationship = string_field(contact, "relationship", "relationship_type");
    let phone = string_field(contact, "phone", "phone");
    let email = optional_string_field(contact, "email", "email");

    if name.is_empty() && relationship.is_empty() && phone.is_empty() {
        return None;
    }

    Some(NormalizedEmergencyContact {
        name,
        relationship,
        phone,
        email,
    })
}

/// Normalize insurance info from either shape. Collapses to `None` when
/// provider and policy number are both empty.
pub fn normalize_insurance_info(insurance: &Value) -> Option<NormalizedInsuranceInfo> {
    if insurance.is_null() {
        return None;
    }

    let provider = string_field(insurance, "provider", "provider");
    let policy_number = string_field(insurance, "policyNumber", "policy_number");
    let group_number = optional_string_field(insurance, "groupNumber", "group_number");
    let effective_date = string_field(insurance, "effectiveDate", "effective_date");
    let expiration_date = optional_string_field(insurance, "expirationDate", "expiration_date");
    let copay = number_field(insurance, "copay", "copay");
    let deductible = number_field(insurance, "deductible", "deductible");

    if provider.is_empty() && policy_number.is_empty() {
        return None;
    }

    Some(NormalizedInsuranceInfo {
        provider,
        policy_number,
        group_number,
        effective_date,
        expiration_date,
        copay,
        deductible,
    })
}

/// Normalize a medication entry. An entry missing name, dosage or frequency
/// is malformed and dropped from the list rather than surfaced as an error.
pub fn normalize_medication(medication: &Value) -> Option<Medication> {
    if medication.is_null() {
        return None;
    }

    let name = string_field(medication, "name", "name");
    let dosage = string_field(medication, "dosage", "dosage");
    let frequency = string_field(medication, "frequency", "frequency");

    if name.is_empty() || dosage.is_empty() || frequency.is_empty() {
        return None;
    }

    let prescribed_by = string_field(medication, "prescribedBy", "prescribing_doctor");
    let start_date = string_field(medication, "startDate", "start_date");
    let end_date = optional_string_field(medication, "endDate", "end_date");
    let id = string_field(medication, "id", "id");
    // Active unless the record explicitly says otherwise.
    let is_active = medication.get("isActive").and_then(Value::as_bool) != Some(false);

    Some(Medication {
        id,
        name,
        dosage,
        frequency,
        prescribed_by,
        start_date,
        end_date,
        is_active,
    })
}

/// Normalize medical info from either shape. Unlike the other sections an
/// all-empty object is still valid: empty allergy or condition lists are
/// meaningful states, so only a missing input collapses to `None`.
pub fn normalize_medical_info(medical_info: &Value) -> Option<NormalizedMedicalInfo> {
    if medical_info.is_null() {
        return None;
    }

    let allergies = string_array(medical_info, "allergies");
    let conditions = string_array(medical_info, "conditions");

    let current_medications = present(medical_info, "currentMedications")
        .or_else(|| present(medical_info, "current_medications"))
        .or_else(|| present(medical_info, "medications"))
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(normalize_medication).collect())
        .unwrap_or_default();

    let blood_type = optional_string_field(medical_info, "bloodType", "blood_type");
    let last_visit = optional_string_field(medical_info, "lastVisit", "last_visit");
    let status = PatientStatus::from_api(&string_field(medical_info, "status", "status"))
        .unwrap_or_default();

    Some(NormalizedMedicalInfo {
        allergies,
        conditions,
        current_medications,
        blood_type,
        last_visit,
        status,
    })
}

/// Normalize a list-endpoint row into the flat table shape. Statuses outside
/// the known set fall back to active and blood types outside the catalog are
/// dropped, matching what the table can render.
pub fn normalize_patient_list_item(patient: &Value) -> PatientListItem {
    let id = patient
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let status = patient
        .get("status")
        .and_then(Value::as_str)
        .and_then(PatientStatus::from_api)
        .unwrap_or_default();

    let blood_type = optional_string_field(patient, "bloodType", "blood_type")
        .filter(|blood_type| patients_core::options::BLOOD_TYPES.contains(&blood_type.as_str()));

    PatientListItem {
        id,
        first_name: string_field(patient, "firstName", "first_name"),
        last_name: string_field(patient, "lastName", "last_name"),
        date_of_birth: string_field(patient, "dateOfBirth", "date_of_birth"),
        email: string_field(patient, "email", "email"),
        phone: string_field(patient, "phone", "phone"),
        status,
        last_visit: optional_string_field(patient, "lastVisit", "last_visit"),
        blood_type,
        insurance_provider: string_field(patient, "insuranceProvider", "insurance_provider"),
    }
}

/// Build the header-card projection for a patient record.
pub fn patient_header(
    patient: &Value,
    medical_info: Option<&NormalizedMedicalInfo>,
) -> PatientHeader {
    let normalized = normalize_patient_value(patient);
    let status = medical_info.map(|info| info.status).unwrap_or_default();

    let initials: String = [
        normalized.first_name.chars().next(),
        normalized.last_name.chars().next(),
    ]
    .into_iter()
    .flatten()
    .flat_map(char::to_uppercase)
    .collect();

    PatientHeader {
        patient_id: normalized.id,
        first_name: normalized.first_name,
        last_name: normalized.last_name,
        initials,
        date_of_birth: normalized.date_of_birth,
        created_at: string_field(patient, "createdAt", "created_at"),
        updated_at: string_field(patient, "updatedAt", "updated_at"),
        email: normalized.email,
        phone: normalized.phone,
        status,
        status_variant: status.variant(),
    }
}

/// Resolve a string field that may live under either key. Empty strings count
/// as absent, so an empty camelCase value falls through to the snake_case one.
pub fn string_field(obj: &Value, camel_key: &str, snake_key: &str) -> String {
    non_empty_str(obj, camel_key)
        .or_else(|| non_empty_str(obj, snake_key))
        .unwrap_or_default()
        .to_string()
}

/// Resolve an optional string field under either key. Empty strings are kept;
/// JSON null and a missing key both map to `None`.
pub fn optional_string_field(obj: &Value, camel_key: &str, snake_key: &str) -> Option<String> {
    obj.get(camel_key)
        .and_then(Value::as_str)
        .or_else(|| obj.get(snake_key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Resolve a numeric field under either key, defaulting to zero.
pub fn number_field(obj: &Value, camel_key: &str, snake_key: &str) -> f64 {
    obj.get(camel_key)
        .and_then(Value::as_f64)
        .or_else(|| obj.get(snake_key).and_then(Value::as_f64))
        .unwrap_or(0.0)
}

/// Date-only prefix of an ISO or space-separated datetime string.
pub fn extract_date_part(date: Option<&str>) -> String {
    let Some(date) = date else {
        return String::new();
    };

    match date.split_once('T') {
        Some((day, _)) => day.to_string(),
        None => date.split(' ').next().unwrap_or_default().to_string(),
    }
}

/// Calendar age for a date of birth, `None` when the date cannot be parsed
/// or lies in the future.
pub fn calculate_age(date_of_birth: &str) -> Option<i32> {
    let birth_date = parse_date(&extract_date_part(Some(date_of_birth)))?;
    let today = Utc::now().date_naive();

    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }

    if age >= 0 {
        Some(age)
    } else {
        None
    }
}

/// Render a date string as `Jan 15, 2024`; `N/A` when absent or unparseable.
pub fn format_date(date: Option<&str>) -> String {
    let Some(parsed) = date.filter(|d| !d.is_empty()).and_then(parse_flexible_date) else {
        return "N/A".to_string();
    };
    format!(
        "{} {}, {}",
        month_abbrev(parsed.month()),
        parsed.day(),
        parsed.year()
    )
}

/// Most recent visit date: the explicit `lastVisit` when set, otherwise the
/// upload date of the newest document.
pub fn last_visit_date(patient: &NormalizedPatientData) -> Option<String> {
    if let Some(last_visit) = patient
        .medical_info
        .as_ref()
        .and_then(|info| info.last_visit.as_deref())
        .filter(|last_visit| !last_visit.is_empty())
    {
        return Some(last_visit.to_string());
    }

    patient
        .documents
        .iter()
        .filter_map(|document| {
            parse_flexible_date(&document.upload_date).map(|date| (date, &document.upload_date))
        })
        .max_by_key(|(date, _)| *date)
        .map(|(_, upload_date)| upload_date.clone())
}

fn non_empty_str<'a>(obj: &'a Value, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// A key counts as present only when it holds a non-null value, so a null
/// camelCase slot falls through to the snake_case one.
fn present<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|value| !value.is_null())
}

fn first_element<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    obj.get(key).and_then(Value::as_array).and_then(|items| items.first())
}

fn string_array(obj: &Value, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    parse_date(value)
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
