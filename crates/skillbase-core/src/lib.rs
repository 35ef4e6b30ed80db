//! Core types and trait definitions for the Skillbase skills store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod assessment;
pub mod employee;
pub mod error;
pub mod grade;
pub mod page;
pub mod profile;
pub mod skill;
pub mod store;
pub mod validate;

pub use error::{Error, Result, StoreError};
