//! Wire types shared by the HTTP API: request and response DTOs.

pub mod api;
pub mod player;
