// src/handlers/mod.rs

pub mod health;
pub mod questions;
pub mod scores;
