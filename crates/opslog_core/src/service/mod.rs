//! Use-case services for the form/table/dashboard collaborators.
//!
//! # Responsibility
//! - Orchestrate store calls into boundary-level APIs.
//! - Keep UI collaborators decoupled from storage details.

pub mod tracker_service;
