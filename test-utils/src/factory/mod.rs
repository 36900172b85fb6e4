//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let session = factory::training_session::create_training_session(&db).await?;
//!     let controller = factory::controller::create_controller(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let session = factory::training_session::TrainingSessionFactory::new(&db)
//!     .student_cid(1234567)
//!     .position("ORD_TWR")
//!     .vatusa_id(Some(998877))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `training_session` - Create training session entities
//! - `controller` - Create controller roster entities
//! - `helpers` - ID generation and convenience methods for bulk creation

pub mod controller;
pub mod helpers;
pub mod training_session;

// Re-export commonly used factory functions for concise usage
pub use controller::create_controller;
pub use training_session::create_training_session;
