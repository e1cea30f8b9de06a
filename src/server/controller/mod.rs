//! HTTP request handlers.
//!
//! Controllers parse path and query parameters, convert request DTOs into validated
//! parameters, call the service layer and convert domain models back into DTOs.

pub mod player;
