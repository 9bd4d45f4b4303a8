//! # Agora Core
//!
//! The domain layer of the Agora posts backend.
//! This crate contains the post aggregate, its authorization policy, the
//! ports it depends on and the service that drives every post mutation.
//! It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
