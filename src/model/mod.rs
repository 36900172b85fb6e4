//! Domain models and operation-specific parameter types.
//!
//! Domain models are constructed from SeaORM entities at the repository
//! boundary via `from_entity`. Parameter structs carry the fields a single
//! operation needs, keeping repository signatures stable.

pub mod controller;
pub mod training_session;
pub mod vatusa;
