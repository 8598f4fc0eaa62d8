//! Customer record and schema validation
//!
//! Validation runs over the raw JSON value before any typed deserialization
//! so that every failing field is reported in one pass: missing fields,
//! non-numeric continuous values, and out-of-set indicators all end up in the
//! same 422, not just the first one found.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FieldError;
use crate::features::{FieldKind, FIELD_TABLE};

/// One customer's feature snapshot, as submitted on the wire.
///
/// Constructed fresh per request and discarded after the response; never
/// persisted. Binary indicators are `u8` but the validator has already
/// constrained them to {0, 1}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub tenure: f64,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f64,
    #[serde(rename = "TotalCharges")]
    pub total_charges: f64,
    #[serde(rename = "gender_Male")]
    pub gender_male: u8,
    #[serde(rename = "Partner_Yes")]
    pub partner_yes: u8,
    #[serde(rename = "Dependents_Yes")]
    pub dependents_yes: u8,
    #[serde(rename = "PhoneService_Yes")]
    pub phone_service_yes: u8,
    #[serde(rename = "MultipleLines_No_phone_service")]
    pub multiple_lines_no_phone_service: u8,
    #[serde(rename = "MultipleLines_Yes")]
    pub multiple_lines_yes: u8,
    #[serde(rename = "InternetService_Fiber_optic")]
    pub internet_service_fiber_optic: u8,
    #[serde(rename = "InternetService_No")]
    pub internet_service_no: u8,
    #[serde(rename = "OnlineSecurity_No_internet_service")]
    pub online_security_no_internet_service: u8,
    #[serde(rename = "OnlineSecurity_Yes")]
    pub online_security_yes: u8,
    #[serde(rename = "OnlineBackup_No_internet_service")]
    pub online_backup_no_internet_service: u8,
    #[serde(rename = "OnlineBackup_Yes")]
    pub online_backup_yes: u8,
    #[serde(rename = "DeviceProtection_No_internet_service")]
    pub device_protection_no_internet_service: u8,
    #[serde(rename = "DeviceProtection_Yes")]
    pub device_protection_yes: u8,
    #[serde(rename = "TechSupport_No_internet_service")]
    pub tech_support_no_internet_service: u8,
    #[serde(rename = "TechSupport_Yes")]
    pub tech_support_yes: u8,
    #[serde(rename = "StreamingTV_No_internet_service")]
    pub streaming_tv_no_internet_service: u8,
    #[serde(rename = "StreamingTV_Yes")]
    pub streaming_tv_yes: u8,
    #[serde(rename = "StreamingMovies_No_internet_service")]
    pub streaming_movies_no_internet_service: u8,
    #[serde(rename = "StreamingMovies_Yes")]
    pub streaming_movies_yes: u8,
    #[serde(rename = "Contract_One_year")]
    pub contract_one_year: u8,
    #[serde(rename = "Contract_Two_year")]
    pub contract_two_year: u8,
    #[serde(rename = "PaperlessBilling_Yes")]
    pub paperless_billing_yes: u8,
    #[serde(rename = "PaymentMethod_Credit_card")]
    pub payment_method_credit_card: u8,
    #[serde(rename = "PaymentMethod_Electronic_check")]
    pub payment_method_electronic_check: u8,
    #[serde(rename = "PaymentMethod_Mailed_check")]
    pub payment_method_mailed_check: u8,
    #[serde(rename = "SeniorCitizen_1")]
    pub senior_citizen_1: u8,
}

impl CustomerRecord {
    /// Validate a raw payload against the field table, then deserialize.
    ///
    /// Validate-all-then-report-all: the walk never stops at the first
    /// failure. Unknown extra fields are ignored.
    pub fn from_json(payload: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(map) = payload.as_object() else {
            return Err(vec![FieldError::new("body", "expected a JSON object")]);
        };

        let mut errors = Vec::new();
        for field in &FIELD_TABLE {
            match map.get(field.name) {
                None => errors.push(FieldError::new(field.name, "field required")),
                Some(value) => match field.kind {
                    FieldKind::Continuous => {
                        if value.as_f64().is_none() {
                            errors.push(FieldError::new(
                                field.name,
                                format!("must be a number, got {}", value),
                            ));
                        }
                    }
                    FieldKind::Binary => match value.as_i64() {
                        Some(0) | Some(1) => {}
                        _ => errors.push(FieldError::new(
                            field.name,
                            format!("must be 0 or 1, got {}", value),
                        )),
                    },
                },
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // The walk above guarantees every field is present and well-typed
        serde_json::from_value(payload.clone())
            .map_err(|e| vec![FieldError::new("body", e.to_string())])
    }
}

// ============================================================================
// TESTS
// ============================================================================
