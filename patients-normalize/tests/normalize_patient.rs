use patients_core::{DocumentKind, PatientStatus, StatusVariant};
use patients_normalize::{
    calculate_age, extract_date_part, format_date, last_visit_date, normalize_address,
    normalize_emergency_contact, normalize_insurance_info, normalize_medical_info,
    normalize_medication, normalize_patient_list_item, normalize_patient_str,
    normalize_patient_value, number_field, optional_string_field, patient_header, string_field,
};
use serde_json::json;

#[test]
fn camel_case_wins_when_both_keys_present() {
    let obj = json!({ "firstName": "A", "first_name": "B" });
    assert_eq!(string_field(&obj, "firstName", "first_name"), "A");
}

#[test]
fn snake_case_fills_in_when_camel_case_absent_or_empty() {
    let obj = json!({ "first_name": "B" });
    assert_eq!(string_field(&obj, "firstName", "first_name"), "B");

    let obj = json!({ "firstName": "", "first_name": "B" });
    assert_eq!(string_field(&obj, "firstName", "first_name"), "B");
}

#[test]
fn field_helpers_are_total_over_odd_shapes() {
    let obj = json!({ "firstName": 7, "first_name": null });
    assert_eq!(string_field(&obj, "firstName", "first_name"), "");
    assert_eq!(optional_string_field(&obj, "firstName", "first_name"), None);
    assert_eq!(number_field(&obj, "copay", "copay"), 0.0);

    // Empty strings survive the optional helper; null falls through.
    let obj = json!({ "email": "", "expiration_date": null });
    assert_eq!(optional_string_field(&obj, "email", "email"), Some(String::new()));
    assert_eq!(
        optional_string_field(&obj, "expirationDate", "expiration_date"),
        None
    );
}

#[test]
fn address_collapses_to_none_when_all_core_fields_empty() {
    let empty = json!({ "street": "", "city": "", "state": "", "zipCode": "" });
    assert_eq!(normalize_address(&empty), None);

    let partial = json!({ "street": "123 Main St", "city": "", "state": "", "zipCode": "" });
    let address = normalize_address(&partial).expect("one populated field keeps the address");
    assert_eq!(address.street, "123 Main St");
    assert_eq!(address.zip_code, "");
    assert_eq!(address.country, None);
}

#[test]
fn address_accepts_snake_case_zip_code() {
    let address = normalize_address(&json!({ "zip_code": "62704" })).expect("address");
    assert_eq!(address.zip_code, "62704");
}

#[test]
fn emergency_contact_aliases_relationship_type() {
    let contact = json!({ "name": "Luis", "relationship_type": "Spouse", "phone": "555-0190" });
    let contact = normalize_emergency_contact(&contact).expect("contact");
    assert_eq!(contact.relationship, "Spouse");

    let blank = json!({ "name": "", "relationship": "", "phone": "", "email": "kept@example.com" });
    assert_eq!(normalize_emergency_contact(&blank), None);
}

#[test]
fn insurance_collapses_without_provider_and_policy() {
    let blank = json!({ "provider": "", "policy_number": "", "copay": 25 });
    assert_eq!(normalize_insurance_info(&blank), None);

    let insurance = json!({ "provider": "Aetna", "policy_number": "AET-4410" });
    let insurance = normalize_insurance_info(&insurance).expect("insurance");
    assert_eq!(insurance.policy_number, "AET-4410");
    assert_eq!(insurance.copay, 0.0);
    assert_eq!(insurance.deductible, 0.0);
    assert_eq!(insurance.group_number, None);
}

#[test]
fn malformed_medications_are_dropped() {
    let info = json!({
        "current_medications": [
            { "name": "A", "dosage": "1mg", "frequency": "daily" },
            { "name": "", "dosage": "1mg", "frequency": "daily" },
            { "name": "B", "dosage": "", "frequency": "daily" }
        ]
    });

    let info = normalize_medical_info(&info).expect("medical info");
    assert_eq!(info.current_medications.len(), 1);
    assert_eq!(info.current_medications[0].name, "A");
    assert!(info.current_medications[0].is_active);
}

#[test]
fn medication_is_active_unless_explicitly_false() {
    let med = json!({ "name": "A", "dosage": "1mg", "frequency": "daily", "isActive": false });
    assert!(!normalize_medication(&med).expect("medication").is_active);

    let med = json!({ "name": "A", "dosage": "1mg", "frequency": "daily", "isActive": "no" });
    assert!(normalize_medication(&med).expect("medication").is_active);
}

#[test]
fn medication_source_key_priority() {
    let info = json!({
        "currentMedications": [{ "name": "Camel", "dosage": "1mg", "frequency": "daily" }],
        "current_medications": [{ "name": "Snake", "dosage": "1mg", "frequency": "daily" }],
        "medications": [{ "name": "Legacy", "dosage": "1mg", "frequency": "daily" }]
    });
    let info = normalize_medical_info(&info).expect("medical info");
    assert_eq!(info.current_medications[0].name, "Camel");

    // A null camelCase slot falls through to the next source.
    let info = json!({
        "currentMedications": null,
        "medications": [{ "name": "Legacy", "dosage": "1mg", "frequency": "daily" }]
    });
    let info = normalize_medical_info(&info).expect("medical info");
    assert_eq!(info.current_medications[0].name, "Legacy");
}

#[test]
fn empty_medical_info_is_still_valid() {
    let info = normalize_medical_info(&json!({})).expect("empty object is meaningful");
    assert!(info.allergies.is_empty());
    assert!(info.conditions.is_empty());
    assert!(info.current_medications.is_empty());
    assert_eq!(info.blood_type, None);
    assert_eq!(info.status, PatientStatus::Active);

    assert_eq!(normalize_medical_info(&serde_json::Value::Null), None);
}

#[test]
fn unknown_status_defaults_to_active() {
    let info = normalize_medical_info(&json!({ "status": "archived" })).expect("medical info");
    assert_eq!(info.status, PatientStatus::Active);

    let info = normalize_medical_info(&json!({ "status": "critical" })).expect("medical info");
    assert_eq!(info.status, PatientStatus::Critical);
}

#[test]
fn numeric_ids_are_coerced_to_strings() {
    let patient = normalize_patient_value(&json!({ "id": 789, "firstName": "T" }));
    assert_eq!(patient.id, "789");
    assert_eq!(patient.first_name, "T");

    let patient = normalize_patient_value(&json!({}));
    assert_eq!(patient.id, "");
}

#[test]
fn api_array_shapes_resolve_to_first_element() {
    let patient = normalize_patient_value(&json!({
        "id": "p-1",
        "addresses": [{ "street": "742 Evergreen Terrace" }, { "street": "ignored" }],
        "emergency_contacts": [{ "name": "Luis", "relationship_type": "Spouse", "phone": "1" }],
        "insurance_info": [{ "provider": "Aetna", "policy_number": "AET-1" }]
    }));

    assert_eq!(patient.address.expect("address").street, "742 Evergreen Terrace");
    assert_eq!(patient.emergency_contact.expect("contact").name, "Luis");
    assert_eq!(patient.insurance.expect("insurance").provider, "Aetna");
}

#[test]
fn ui_single_object_shape_wins_over_api_array() {
    let patient = normalize_patient_value(&json!({
        "address": { "street": "UI street" },
        "addresses": [{ "street": "API street" }]
    }));
    assert_eq!(patient.address.expect("address").street, "UI street");
}

#[test]
fn documents_default_to_empty_and_drop_undecodable_entries() {
    let patient = normalize_patient_value(&json!({ "documents": "not-an-array" }));
    assert!(patient.documents.is_empty());

    let patient = normalize_patient_value(&json!({
        "documents": [
            { "id": "doc-1", "type": "insurance_card", "name": "Card",
              "uploadDate": "2024-01-15", "fileSize": 1024, "mimeType": "image/png", "url": "/d/1" },
            { "id": "doc-2", "type": "hologram" },
            { "id": 42 }
        ]
    }));

    assert_eq!(patient.documents.len(), 2);
    assert_eq!(patient.documents[0].kind, DocumentKind::InsuranceCard);
    // Unknown document types are kept, bucketed as Other.
    assert_eq!(patient.documents[1].kind, DocumentKind::Other);
    assert_eq!(patient.documents[1].upload_date, "");
}

#[test]
fn normalization_is_idempotent() {
    let source = json!({
        "id": 42,
        "first_name": "Maria",
        "lastName": "Gonzalez",
        "date_of_birth": "1987-04-12",
        "addresses": [{ "street": "1 Main", "zip_code": "00001" }],
        "medical_info": {
            "allergies": ["Penicillin"],
            "medications": [{ "name": "A", "dosage": "1mg", "frequency": "daily" }],
            "status": "inactive"
        }
    });

    let once = normalize_patient_value(&source);
    let reencoded = serde_json::to_value(&once).expect("serialize");
    let twice = normalize_patient_value(&reencoded);

    assert_eq!(once, twice);
}

#[test]
fn parse_entry_point_rejects_invalid_json_only() {
    assert!(normalize_patient_str("{ not json").is_err());

    let patient = normalize_patient_str(r#"{ "id": "p-9" }"#).expect("valid JSON");
    assert_eq!(patient.id, "p-9");
    assert_eq!(patient.medical_info, None);
    assert_eq!(patient.address, None);
}

#[test]
fn list_item_accepts_both_conventions() {
    let row = normalize_patient_list_item(&json!({
        "id": "2",
        "first_name": "Jane",
        "last_name": "Smith",
        "date_of_birth": "1985-05-20",
        "email": "jane@example.com",
        "phone": "555-5678",
        "status": "inactive",
        "last_visit": "2023-12-10",
        "blood_type": "A-",
        "insurance_provider": "Aetna"
    }));

    assert_eq!(row.first_name, "Jane");
    assert_eq!(row.status, PatientStatus::Inactive);
    assert_eq!(row.last_visit.as_deref(), Some("2023-12-10"));
    assert_eq!(row.blood_type.as_deref(), Some("A-"));
    assert_eq!(row.insurance_provider, "Aetna");
}

#[test]
fn list_item_validates_status_and_blood_type() {
    let row = normalize_patient_list_item(&json!({
        "id": "4",
        "status": "invalid_status",
        "bloodType": "Z+"
    }));

    assert_eq!(row.status, PatientStatus::Active);
    assert_eq!(row.blood_type, None);

    let row = normalize_patient_list_item(&json!({ "id": "5", "bloodType": null }));
    assert_eq!(row.blood_type, None);
}

#[test]
fn header_builds_initials_and_variant() {
    let patient = json!({
        "id": "p-1",
        "first_name": "maria",
        "last_name": "gonzalez",
        "created_at": "2023-01-02T08:00:00Z",
        "updatedAt": "2024-02-10T09:45:00Z"
    });

    let medical_info = normalize_medical_info(&json!({ "status": "critical" }));
    let header = patient_header(&patient, medical_info.as_ref());

    assert_eq!(header.initials, "MG");
    assert_eq!(header.status, PatientStatus::Critical);
    assert_eq!(header.status_variant, StatusVariant::Destructive);
    assert_eq!(header.created_at, "2023-01-02T08:00:00Z");
    assert_eq!(header.updated_at, "2024-02-10T09:45:00Z");

    let header = patient_header(&patient, None);
    assert_eq!(header.status, PatientStatus::Active);
    assert_eq!(header.status_variant, StatusVariant::Success);
}

#[test]
fn date_part_extraction() {
    assert_eq!(extract_date_part(Some("2024-01-15T10:30:00Z")), "2024-01-15");
    assert_eq!(extract_date_part(Some("2024-01-15 10:30:00")), "2024-01-15");
    assert_eq!(extract_date_part(Some("2024-01-15")), "2024-01-15");
    assert_eq!(extract_date_part(None), "");
    assert_eq!(extract_date_part(Some("")), "");
}

#[test]
fn date_formatting() {
    assert_eq!(format_date(Some("2024-01-15T10:30:00Z")), "Jan 15, 2024");
    assert_eq!(format_date(Some("2024-12-03")), "Dec 3, 2024");
    assert_eq!(format_date(None), "N/A");
    assert_eq!(format_date(Some("")), "N/A");
    assert_eq!(format_date(Some("not a date")), "N/A");
}

#[test]
fn age_calculation_is_defensive() {
    assert_eq!(calculate_age("not a date"), None);
    assert_eq!(calculate_age("2999-01-01"), None);
    assert!(calculate_age("1990-06-15").expect("age") >= 35);
    assert!(calculate_age("1990-06-15T00:00:00Z").expect("age") >= 35);
}

#[test]
fn last_visit_falls_back_to_newest_document() {
    let patient = normalize_patient_value(&json!({
        "medical_info": { "last_visit": "2024-02-10" }
    }));
    assert_eq!(last_visit_date(&patient).as_deref(), Some("2024-02-10"));

    let patient = normalize_patient_value(&json!({
        "documents": [
            { "id": "doc-1", "uploadDate": "2023-06-01T08:00:00Z" },
            { "id": "doc-2", "uploadDate": "2024-01-15T10:30:00Z" },
            { "id": "doc-3", "uploadDate": "garbled" }
        ]
    }));
    assert_eq!(
        last_visit_date(&patient).as_deref(),
        Some("2024-01-15T10:30:00Z")
    );

    let patient = normalize_patient_value(&json!({}));
    assert_eq!(last_visit_date(&patient), None);
}
