//! Polly API client and models
//!
//! This module handles communication with the poll-management API
//! and defines the data models for its requests/responses.

pub mod client;
pub mod error;
pub mod models;
