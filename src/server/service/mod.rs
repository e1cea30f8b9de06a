//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! apply business rules such as derived-field computation and own transaction
//! boundaries, working with domain models rather than DTOs or entity models.

pub mod player;
