//! Framework-neutral WASM <-> JavaScript bridge for the normalization layer.

use patients_core::{has_active_filters, normalize_filter_values, PatientFilters};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Normalize a patient record (either naming convention) into the canonical
/// camelCase shape consumed by the dashboard components.
#[wasm_bindgen]
pub fn normalize_patient(patient: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let patient_value = from_value::<serde_json::Value>(patient)
        .map_err(|err| JsValue::from_str(&format!("failed to read patient JSON: {err}")))?;

    let normalized = patients_normalize::normalize_patient_value(&patient_value);

    to_value(&normalized)
        .map_err(|err| JsValue::from_str(&format!("failed to serialize patient: {err}")))
}

/// Normalize a list-endpoint row into the flat table shape.
#[wasm_bindgen]
pub fn normalize_list_item(patient: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let patient_value = from_value::<serde_json::Value>(patient)
        .map_err(|err| JsValue::from_str(&format!("failed to read patient JSON: {err}")))?;

    let item = patients_normalize::normalize_patient_list_item(&patient_value);

    to_value(&item).map_err(|err| JsValue::from_str(&format!("failed to serialize row: {err}")))
}

/// Reconcile raw filter-control state into the canonical array-or-absent
/// query shape.
#[wasm_bindgen]
pub fn normalize_filters(filters: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let filters: PatientFilters = from_value(filters)
        .map_err(|err| JsValue::from_str(&format!("failed to read filters: {err}")))?;

    let normalized = normalize_filter_values(&filters);

    to_value(&normalized)
        .map_err(|err| JsValue::from_str(&format!("failed to serialize filters: {err}")))
}

/// True when the search box or any filter dimension constrains the list.
#[wasm_bindgen]
pub fn any_active_filters(filters: JsValue, search_input: String) -> Result<bool, JsValue> {
    let filters: PatientFilters = from_value(filters)
        .map_err(|err| JsValue::from_str(&format!("failed to read filters: {err}")))?;

    Ok(has_active_filters(&filters, &search_input))
}
