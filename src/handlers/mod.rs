//! Request handlers

pub mod health;
pub mod meta;
pub mod predict;
