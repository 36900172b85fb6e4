pub mod duration;
pub mod initials;
