//! # Quill Shared
//!
//! Request and response types of the HTTP API.
//! Kept apart from the server so a client can depend on them alone.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
