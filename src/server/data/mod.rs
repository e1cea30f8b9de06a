//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) using SeaORM entity models. They return
//! entity models and take parameter models, leaving business rules to the service layer.

pub mod player;
