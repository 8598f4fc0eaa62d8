//! Feature schema and vectorization

pub mod layout;
pub mod vector;

pub use layout::{FieldKind, FieldSpec, FEATURE_COUNT, FIELD_TABLE};
pub use vector::FeatureVector;
