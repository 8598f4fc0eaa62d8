//! Feature Vector - the model's input encoding
//!
//! Maps a validated [`CustomerRecord`] into the fixed 30-position vector the
//! classifier was trained on. Pure and deterministic; no scaling or
//! imputation happens here (continuous values arrive already normalized).

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FIELD_TABLE};
use crate::models::CustomerRecord;

/// Ordered feature values in the layout defined by [`FIELD_TABLE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build the vector from a validated record, in exact training order.
    ///
    /// The listing below mirrors [`FIELD_TABLE`]: position N here is the
    /// field named at position N there.
    pub fn from_record(record: &CustomerRecord) -> Self {
        let values = [
            record.tenure as f32,
            record.monthly_charges as f32,
            record.total_charges as f32,
            record.gender_male as f32,
            record.partner_yes as f32,
            record.dependents_yes as f32,
            record.phone_service_yes as f32,
            record.multiple_lines_no_phone_service as f32,
            record.multiple_lines_yes as f32,
            record.internet_service_fiber_optic as f32,
            record.internet_service_no as f32,
            record.online_security_no_internet_service as f32,
            record.online_security_yes as f32,
            record.online_backup_no_internet_service as f32,
            record.online_backup_yes as f32,
            record.device_protection_no_internet_service as f32,
            record.device_protection_yes as f32,
            record.tech_support_no_internet_service as f32,
            record.tech_support_yes as f32,
            record.streaming_tv_no_internet_service as f32,
            record.streaming_tv_yes as f32,
            record.streaming_movies_no_internet_service as f32,
            record.streaming_movies_yes as f32,
            record.contract_one_year as f32,
            record.contract_two_year as f32,
            record.paperless_billing_yes as f32,
            record.payment_method_credit_card as f32,
            record.payment_method_electronic_check as f32,
            record.payment_method_mailed_check as f32,
            record.senior_citizen_1 as f32,
        ];
        Self { values }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get a value by its wire field name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::field_index(name).map(|i| self.values[i])
    }

    /// Pair each value with its training column label, in order
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FIELD_TABLE
            .iter()
            .zip(self.values.iter())
            .map(|(field, value)| (field.column, *value))
    }
}

// ============================================================================
// TESTS
// ============================================================================
