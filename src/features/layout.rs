//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The classifier was trained against the literal column labels below,
//! including embedded spaces and the `(automatic)` suffix. The wire field
//! names use underscores instead. Both spellings live in this one table so
//! that validation and vectorization can never drift apart: if the model is
//! retrained with different labels, this table is the only place to touch.

// ============================================================================
// FIELD TABLE (Authoritative source)
// ============================================================================

/// How a field is constrained by the schema validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Numeric, already normalized upstream. No range constraint.
    Continuous,
    /// One-hot indicator. Must be the integer 0 or 1.
    Binary,
}

/// One entry of the feature schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name as it appears on the wire (underscores only).
    pub name: &'static str,
    /// Column label the model was trained on (may contain spaces/parentheses).
    pub column: &'static str,
    pub kind: FieldKind,
}

/// Total number of input features.
/// IMPORTANT: Must match FIELD_TABLE.len()!
pub const FEATURE_COUNT: usize = 30;

/// Fields in the exact order the model expects its input vector.
/// This is the SINGLE SOURCE OF TRUTH for the feature schema.
pub const FIELD_TABLE: [FieldSpec; FEATURE_COUNT] = [
    // === Continuous (0-2) ===
    FieldSpec { name: "tenure", column: "tenure", kind: FieldKind::Continuous },
    FieldSpec { name: "MonthlyCharges", column: "MonthlyCharges", kind: FieldKind::Continuous },
    FieldSpec { name: "TotalCharges", column: "TotalCharges", kind: FieldKind::Continuous },
    // === Binary indicators (3-29) ===
    FieldSpec { name: "gender_Male", column: "gender_Male", kind: FieldKind::Binary },
    FieldSpec { name: "Partner_Yes", column: "Partner_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "Dependents_Yes", column: "Dependents_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "PhoneService_Yes", column: "PhoneService_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "MultipleLines_No_phone_service", column: "MultipleLines_No phone service", kind: FieldKind::Binary },
    FieldSpec { name: "MultipleLines_Yes", column: "MultipleLines_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "InternetService_Fiber_optic", column: "InternetService_Fiber optic", kind: FieldKind::Binary },
    FieldSpec { name: "InternetService_No", column: "InternetService_No", kind: FieldKind::Binary },
    FieldSpec { name: "OnlineSecurity_No_internet_service", column: "OnlineSecurity_No internet service", kind: FieldKind::Binary },
    FieldSpec { name: "OnlineSecurity_Yes", column: "OnlineSecurity_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "OnlineBackup_No_internet_service", column: "OnlineBackup_No internet service", kind: FieldKind::Binary },
    FieldSpec { name: "OnlineBackup_Yes", column: "OnlineBackup_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "DeviceProtection_No_internet_service", column: "DeviceProtection_No internet service", kind: FieldKind::Binary },
    FieldSpec { name: "DeviceProtection_Yes", column: "DeviceProtection_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "TechSupport_No_internet_service", column: "TechSupport_No internet service", kind: FieldKind::Binary },
    FieldSpec { name: "TechSupport_Yes", column: "TechSupport_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "StreamingTV_No_internet_service", column: "StreamingTV_No internet service", kind: FieldKind::Binary },
    FieldSpec { name: "StreamingTV_Yes", column: "StreamingTV_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "StreamingMovies_No_internet_service", column: "StreamingMovies_No internet service", kind: FieldKind::Binary },
    FieldSpec { name: "StreamingMovies_Yes", column: "StreamingMovies_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "Contract_One_year", column: "Contract_One year", kind: FieldKind::Binary },
    FieldSpec { name: "Contract_Two_year", column: "Contract_Two year", kind: FieldKind::Binary },
    FieldSpec { name: "PaperlessBilling_Yes", column: "PaperlessBilling_Yes", kind: FieldKind::Binary },
    FieldSpec { name: "PaymentMethod_Credit_card", column: "PaymentMethod_Credit card (automatic)", kind: FieldKind::Binary },
    FieldSpec { name: "PaymentMethod_Electronic_check", column: "PaymentMethod_Electronic check", kind: FieldKind::Binary },
    FieldSpec { name: "PaymentMethod_Mailed_check", column: "PaymentMethod_Mailed check", kind: FieldKind::Binary },
    FieldSpec { name: "SeniorCitizen_1", column: "SeniorCitizen_1", kind: FieldKind::Binary },
];

// ============================================================================
// LOOKUPS
// ============================================================================

/// Get field index by wire name (O(n) but fields are few)
pub fn field_index(name: &str) -> Option<usize> {
    FIELD_TABLE.iter().position(|f| f.name == name)
}

/// Get the training column label at a vector position
pub fn column_name(index: usize) -> Option<&'static str> {
    FIELD_TABLE.get(index).map(|f| f.column)
}

// ============================================================================
// TESTS
// ============================================================================
