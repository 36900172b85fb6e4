//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between
//! the binary entrypoint and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than entity models

pub mod roster;
pub mod vatusa_sync;
