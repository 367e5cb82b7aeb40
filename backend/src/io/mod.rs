//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Handlers
//! translate query strings and JSON bodies into domain commands, and domain
//! results and errors back into status codes and JSON.

pub mod rest;

pub use rest::*;
