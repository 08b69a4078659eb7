//! # Bloglist Core
//!
//! The domain layer of the bloglist backend.
//! This crate contains the Blog entity, its validation rules and the
//! repository port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError, ValidationError};
