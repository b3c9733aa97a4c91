//! # Quill Core
//!
//! The domain layer of Quill.
//! Entities, the filter engine, request composition and the ports that
//! storage and identity backends implement. No infrastructure dependencies.

pub mod compose;
pub mod domain;
pub mod error;
pub mod filter;
pub mod ports;

pub use error::DomainError;
pub use filter::BlogFilter;
