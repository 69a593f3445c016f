//! Test doubles for code that depends on the storage layer.

pub mod repositories;
