// src/handlers/mod.rs

pub mod categories;
pub mod fallback;
pub mod questions;
pub mod quizzes;
