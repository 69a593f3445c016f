//! # Cal.in core
//!
//! Domain types, errors and the scheduling kernel shared by the storage and
//! API crates. Nothing in here performs I/O: storage is reached through the
//! [`scheduling::SchedulingStore`] trait, which the `calin-db` crate implements
//! on top of PostgreSQL.

pub mod errors;
pub mod models;
pub mod scheduling;
