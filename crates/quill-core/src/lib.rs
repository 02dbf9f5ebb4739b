//! # Quill Core
//!
//! The domain layer of the Quill blog post service.
//! This crate contains the blog post model, its validation rules and the
//! store port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
