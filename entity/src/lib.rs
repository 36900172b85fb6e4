//! SeaORM entity definitions shared by the application, migrations, and tests.

pub mod prelude;

pub mod controller;
pub mod training_session;
