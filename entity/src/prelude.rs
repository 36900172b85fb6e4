pub use super::controller::Entity as Controller;
pub use super::training_session::Entity as TrainingSession;
