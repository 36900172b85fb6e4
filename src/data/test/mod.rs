mod controller;
mod training_session;
