//! Networking modules for the OctoFit REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema and response
//! normalization, and `error` the failure kinds shown to users.

pub mod api;
pub mod error;
pub mod types;
