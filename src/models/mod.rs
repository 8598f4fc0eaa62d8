//! Request and response models

pub mod customer;
pub mod response;

pub use customer::*;
pub use response::*;
