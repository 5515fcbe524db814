//! # ontrack-entity
//!
//! Domain entity models for OnTrack. Database entities derive
//! `sqlx::FromRow` alongside the serde traits.

pub mod todo;
