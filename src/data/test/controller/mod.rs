use crate::{data::controller::ControllerRepository, model::controller::CreateControllerParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::controller::ControllerFactory};

mod create;
mod find_by_cid;
mod get_all_operating_initials;
