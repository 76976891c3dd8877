// src/utils/mod.rs

pub mod readiness;
pub mod validation;
