use crate::{
    data::training_session::TrainingSessionRepository,
    model::training_session::{NewTrainingSessionParam, UpdateFromVatusaParam},
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        create_training_session, helpers::create_unsynced_sessions,
        training_session::TrainingSessionFactory,
    },
};

mod bind_vatusa_id;
mod create;
mod find_by_vatusa_id;
mod get_all;
mod update_from_vatusa;
