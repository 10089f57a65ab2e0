// src/queries/mod.rs

//! Storage queries behind the HTTP handlers: filtered question listings,
//! category lookups, and quiz question selection.

pub mod categories;
pub mod questions;
pub mod quiz;
